mod common;
use common::*;
use teco::mach::Runtime;

#[test]
fn test_insert_and_move() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "@I/hello/ J 2C .="), "2\n");
    assert_eq!(exec(r, "Z= B="), "5\n0\n");
    assert_eq!(exec(r, "0A="), "108\n");
    assert_eq!(exec(r, "-1A="), "101\n");
    assert_eq!(exec(r, "HT"), "hello");
    assert_eq!(exec(r, "1,3T"), "el");
    assert_eq!(exec(r, "10C"), "?POP Attempt to move pointer off page 10C\n");
    assert_eq!(exec(r, ":10C="), "0\n");
    assert_eq!(exec(r, ":R="), "-1\n");
    assert_eq!(exec(r, "J 3D HT"), "lo");
    assert_eq!(exec(r, "HK 65I$ HT"), "A");
}

#[test]
fn test_lines() {
    let r = &mut Runtime::default();
    exec(r, "@I/ab\ncd\nef\n/");
    assert_eq!(exec(r, "J L .="), "3\n");
    assert_eq!(exec(r, "T"), "cd\n");
    assert_eq!(exec(r, "V"), "cd\n");
    assert_eq!(exec(r, "2V"), "ab\ncd\nef\n");
    assert_eq!(exec(r, "^Q="), "3\n");
    assert_eq!(exec(r, "ZJ -L .="), "6\n");
    assert_eq!(exec(r, "J K HT"), "cd\nef\n");
}

#[test]
fn test_registers_and_buffer() {
    let r = &mut Runtime::default();
    exec(r, "@I/abc/");
    assert_eq!(exec(r, "HXA HK Z= GA HT"), "0\nabc");
    assert_eq!(exec(r, "0,1:XA :GA"), "abca");
}

#[test]
fn test_numbers_in_buffer() {
    let r = &mut Runtime::default();
    exec(r, "@I/-42xyz/");
    assert_eq!(exec(r, "J \\= .="), "-42\n3\n");
    assert_eq!(exec(r, "HK 255UA 16^R QA\\ HT"), "FF");
    assert_eq!(exec(r, "HK J \\="), "0\n");
}

#[test]
fn test_extreme_arguments_stay_on_page() {
    let r = &mut Runtime::default();
    assert_eq!(
        exec(r, "@I/ab/ 9223372036854775807C"),
        "?POP Attempt to move pointer off page 9223372036854775807C\n"
    );
    assert_eq!(exec(r, ":9223372036854775807R="), "0\n");
    assert_eq!(exec(r, "HK @I/a\nb/ -9223372036854775807-1L .="), "0\n");
    assert_eq!(exec(r, "9223372036854775807L .="), "3\n");
    assert_eq!(exec(r, "J -9223372036854775807-1V"), "");
}
