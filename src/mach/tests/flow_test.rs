use super::*;

#[test]
fn test_counted_loop() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "3<1=>"), "1\n1\n1\n");
    assert_eq!(run(&mut r, "0<1=>2="), "2\n");
    assert_eq!(run(&mut r, "-4<1=>"), "");
}

#[test]
fn test_infinite_loop_with_semicolon() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "0UA <%A$ QA-3;> QA="), "3\n");
    assert_eq!(run(&mut r, "0UA <%A$ 2-QA:;> QA="), "3\n");
}

#[test]
fn test_strict_nesting_at_end_of_conditional() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, "4E2 0\"E 2< ' >"),
        "?NST Improper nesting of loop and conditional\n"
    );
}

#[test]
fn test_strict_nesting_across_else() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, "4E2 0\"E 1< | > '"),
        "?NST Improper nesting of loop and conditional\n"
    );
    assert_eq!(run(&mut r, "4E2 0\"E 1<2=> | 3= '"), "2\n");
    assert_eq!(run(&mut r, "4E2 1\"E 1<2=> | 2<3=> '"), "3\n3\n");
}

#[test]
fn test_flow_commands() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "3<1= F> 2=>"), "1\n1\n1\n");
    assert_eq!(run(&mut r, "1\"N 1= F' 2= ' 3="), "1\n3\n");
    assert_eq!(run(&mut r, "1\"N 1= F| 2= | 3= ' 4="), "1\n3\n4\n");
    assert_eq!(run(&mut r, "1= F> 2="), "1\n");
}

#[test]
fn test_restart_loop() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "0UA 2< %A$ QA-3\"L F< ' QA= >"), "3\n4\n");
}

#[test]
fn test_computed_goto() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "2Oa,b$ !a! 1= !b! 2="), "2\n");
    assert_eq!(run(&mut r, "5Oa,b$ 3="), "3\n");
    assert_eq!(run(&mut r, "1O,b$ 3="), "3\n");
}

#[test]
fn test_comment() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "!! not a tag\n1="), "1\n");
    assert_eq!(run(&mut r, "0E1 !!2="), "2\n");
}
