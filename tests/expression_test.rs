mod common;
use common::*;
use teco::mach::Runtime;

#[test]
fn test_precedence_modes() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "5+3*2="), "16\n");
    assert_eq!(exec(r, "2,2E1 5+3*2="), "11\n");
    assert_eq!(exec(r, "2+3&1="), "1\n");
    assert_eq!(exec(r, "(1<<2+1)="), "8\n");
    assert_eq!(exec(r, "(1+2==3)="), "-1\n");
}

#[test]
fn test_print_radix() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "8=="), "10\n");
    assert_eq!(exec(r, "255==="), "FF\n");
    assert_eq!(exec(r, "7:=8="), "78\n");
}

#[test]
fn test_input_radix() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "8^R 17="), "15\n");
    assert_eq!(exec(r, "^R="), "8\n");
    assert_eq!(exec(r, "8="), "?ILN Illegal number '8'\n");
    assert_eq!(exec(r, "^D ^R="), "10\n");
    assert_eq!(exec(r, "^O 10UA ^D QA="), "8\n");
    assert_eq!(exec(r, "3^R"), "?IRA Illegal radix argument to ^R 3\n");
}

#[test]
fn test_caret_forms() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "^^A="), "65\n");
    assert_eq!(exec(r, "\x01hi\x01"), "hi");
    assert_eq!(exec(r, "^1"), "?IUC Illegal character following ^ '1'\n");
    assert_eq!(exec(r, "^Y"), "?ILL Illegal command '^Y'\n");
}

#[test]
fn test_type_and_ctrl_a() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "72^T 105^T"), "Hi");
    assert_eq!(exec(r, "@^A/hello/"), "hello");
    assert_eq!(exec(r, ":@^A/hello/"), "hello\n");
}

#[test]
fn test_flags() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "E1="), "13\n");
    assert_eq!(exec(r, "1,0E1 E1="), "12\n");
    assert_eq!(exec(r, "3EH EH="), "3\n");
    assert_eq!(exec(r, "EO="), "200\n");
}

#[test]
fn test_comma_needs_argument() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, ",5="), "?NAC No argument before ,\n");
}

#[test]
fn test_unmatched_parens() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "(1"), "?MRP Missing right parenthesis\n");
    assert_eq!(exec(r, "1)="), "?MLP Missing left parenthesis\n");
}
