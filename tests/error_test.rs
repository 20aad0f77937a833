mod common;
use common::*;
use teco::mach::Runtime;

#[test]
fn test_error_help_levels() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "Y"), "?ILL Illegal command 'Y'\n");
    assert_eq!(exec(r, "1EH Y"), "?ILL\n");
    assert_eq!(exec(r, "6EH 1=Y2="), "1\n?ILL Illegal command 'Y'\n6EH 1=Y\n");
}

#[test]
fn test_abort_on_error() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "128ET Y"), "?ILL Illegal command 'Y'\nEXIT\n");
}

#[test]
fn test_unknown_secondary_commands() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "EZ"), "?IEC Illegal E character 'Z'\n");
    assert_eq!(exec(r, "FZ"), "?IFC Illegal F character 'Z'\n");
}

#[test]
fn test_strict_arguments() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "2E2 @C"), "?MOD Illegal modifier C\n");
    assert_eq!(exec(r, "2E2 1,2C"), "?ARG Improper arguments 1,2C\n");
    assert_eq!(exec(r, "0E2 @I/ab/ 1,2J .="), "2\n");
}

#[test]
fn test_stacks_reset_after_error() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "2<(1"), "?MRA Missing right angle bracket\n");
    assert_eq!(exec(r, "1=>"), "1\n?BNI > not in iteration\n");
}

#[test]
fn test_search_not_implemented() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "Sabc$"), "?NYI Not yet implemented S\n");
}

#[test]
fn test_trace() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "?1=?"), "1=1\n?");
}
