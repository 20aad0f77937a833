mod common;
use common::*;
use teco::lang::RegName;
use teco::mach::Runtime;

#[test]
fn test_numeric_registers() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "5UA QA="), "5\n");
    assert_eq!(exec(r, "%A$ QA="), "6\n");
    assert_eq!(exec(r, "10%A="), "16\n");
    assert_eq!(exec(r, "3,4UB$ QB="), "4\n");
    assert_eq!(exec(r, "3,4UB="), "3\n");
    assert_eq!(exec(r, "UB"), "?NAU No argument before U\n");
}

#[test]
fn test_text_registers() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "@^UA/abc/ :QA="), "3\n");
    assert_eq!(exec(r, ":@^UA/de/ :GA"), "abcde");
    assert_eq!(exec(r, "1QA="), "98\n");
    assert_eq!(exec(r, "9QA="), "-1\n");
    assert_eq!(exec(r, "65^UB$ :GB"), "A");
    assert_eq!(exec(r, "^Z="), "6\n");
}

#[test]
fn test_special_registers() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "@^U*/name/ 0,0X_"), "");
    assert_eq!(exec(r, "G_"), "?IQN Illegal Q-register name '_'\n");
    assert_eq!(exec(r, "Q#"), "?IQN Illegal Q-register name '#'\n");
}

#[test]
fn test_push_and_pop() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "5UA [A 7UA ]A QA="), "5\n");
    assert_eq!(exec(r, "@^UA/x/ [A @^UA/y/ ]B :GB"), "x");
    assert_eq!(exec(r, "]A"), "?CPQ Can't pop into Q-register\n");
    assert_eq!(exec(r, ":]A="), "0\n");
    assert_eq!(exec(r, "[A :]A="), "-1\n");
}

#[test]
fn test_host_access() {
    let r = &mut Runtime::default();
    let a = RegName::new(b'A', false).unwrap();
    r.registers_mut().set_text(a, "2*3=");
    assert_eq!(exec(r, "MA"), "6\n");
    exec(r, "12UA");
    assert_eq!(r.registers().value(a), 12);
}
