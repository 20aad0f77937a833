use super::*;

#[test]
fn test_flat_and_c_like_precedence() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "5+3*2="), "16\n");
    assert_eq!(run(&mut r, "2,2E1 5+3*2="), "11\n");
    assert_eq!(run(&mut r, "E1&2="), "2\n");
    assert_eq!(run(&mut r, "-2*3+10="), "4\n");
}

#[test]
fn test_lone_minus_is_minus_one() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "-="), "-1\n");
    assert_eq!(run(&mut r, "-UA QA="), "-1\n");
}

#[test]
fn test_parens_replace_operand() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "7UA 2(QA)="), "7\n");
    assert_eq!(run(&mut r, "2*(3+4)="), "14\n");
    assert_eq!(run(&mut r, "-(3)*2="), "-6\n");
}

#[test]
fn test_extended_operators_inside_parens() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "(5>3)="), "-1\n");
    assert_eq!(run(&mut r, "(5<=3)="), "0\n");
    assert_eq!(run(&mut r, "(7//3)="), "1\n");
    assert_eq!(run(&mut r, "(1<<4)="), "16\n");
    assert_eq!(run(&mut r, "(64>>2)="), "16\n");
    assert_eq!(run(&mut r, "(6~3)="), "5\n");
    assert_eq!(run(&mut r, "(!0)="), "-1\n");
    assert_eq!(run(&mut r, "(3==3)="), "-1\n");
    assert_eq!(run(&mut r, "(2<>3)="), "-1\n");
    assert_eq!(run(&mut r, "(2!=2)="), "0\n");
}

#[test]
fn test_extended_operators_need_flag() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "0E1 (6~3)="), "?ILL Illegal command '~'\n");
}

#[test]
fn test_complement() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "5^_="), "-6\n");
    assert_eq!(run(&mut r, "^_="), "?NAB No argument before ^_\n");
}

#[test]
fn test_division_by_zero() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "4/0="), "0\n");
    assert_eq!(run(&mut r, "1E2 4/0="), "?DIV Division by zero\n");
}

#[test]
fn test_overflow() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, "9223372036854775807+1="),
        "?OVF Arithmetic overflow\n"
    );
}

#[test]
fn test_skipped_division_is_silent() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "1E2 0\"N (4/0)= ' 1="), "1\n");
}

#[test]
fn test_skipped_literal_never_overflows() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "0\"N 99999999999999999999 ' 1="), "1\n");
    assert_eq!(run(&mut r, "0\"N 9^R 19 ' 2="), "2\n");
}
