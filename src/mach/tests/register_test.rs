use super::*;
use crate::lang::RegName;

#[test]
fn test_local_registers_are_scoped() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "@^UA/7U.B/ 1U.B MA Q.B="), "1\n");
    assert_eq!(run(&mut r, "1U.B :MA Q.B="), "7\n");
}

#[test]
fn test_runtime_invoke() {
    let mut r = Runtime::default();
    run(&mut r, "@^UM/42UA/");
    r.invoke(RegName::new(b'M', false).unwrap());
    assert_eq!(r.execute(), Event::Stopped);
    assert_eq!(r.registers().value(RegName::new(b'A', false).unwrap()), 42);
}

#[test]
fn test_error_resets_save_stack() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "[A Y"), "?ILL Illegal command 'Y'\n");
    assert_eq!(run(&mut r, ":]A="), "0\n");
}
