mod common;
use common::*;
use teco::mach::Runtime;

#[test]
fn test_conditional_branches() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "5\"G123='"), "123\n");
    assert_eq!(exec(r, "-5\"G123='"), "");
    assert_eq!(exec(r, "-5\"G1=|2='3="), "2\n3\n");
    assert_eq!(exec(r, "65\"A1=|2='"), "1\n");
    assert_eq!(exec(r, "0\"X'"), "?IQC Illegal quote character 'X'\n");
    assert_eq!(exec(r, "\"E'"), "?NAQ No argument before \"\n");
}

#[test]
fn test_nested_conditionals_skip_whole() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "0\"N 1\"N 1= | 2= ' 3= | 4= ' 5="), "4\n5\n");
}

#[test]
fn test_conditional_passes_value_through() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "1\"N 7'="), "7\n");
}

#[test]
fn test_loops() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "0UA 3<%A$ QA=>"), "1\n2\n3\n");
    assert_eq!(exec(r, "2<2<1:=>>"), "1111");
    assert_eq!(exec(r, "0UA <%A$ QA-5;> QA="), "5\n");
    assert_eq!(exec(r, ">"), "?BNI > not in iteration\n");
    assert_eq!(exec(r, "1;"), "?SNI ; not in iteration\n");
    assert_eq!(exec(r, "2<;>"), "?NAS No argument before ;\n");
}

#[test]
fn test_semicolon_drops_inner_conditional() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "0UA <%A$ QA-2\"E 0; ' > QA="), "2\n");
}

#[test]
fn test_unterminated_structures() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "<"), "?MRA Missing right angle bracket\n");
    assert_eq!(exec(r, "0<"), "?MRA Missing right angle bracket\n");
    assert_eq!(exec(r, "1\"E"), "?MAP Missing apostrophe\n");
    assert_eq!(exec(r, "1\"N"), "?MAP Missing apostrophe\n");
    assert_eq!(exec(r, "'"), "?MSC Missing start of conditional\n");
}

#[test]
fn test_tags() {
    let r = &mut Runtime::default();
    assert_eq!(
        exec(r, "0UA !top! %A$ QA-3\"L Otop$ ' QA="),
        "3\n"
    );
    assert_eq!(exec(r, "Oend$ 1= !end! 2="), "2\n");
    assert_eq!(exec(r, "@O/end/ 1= !end! 2="), "2\n");
    assert_eq!(exec(r, "Ob$"), "?TAG Missing tag !b!\n");
    assert_eq!(exec(r, "Oa$ !a! !a!"), "?DUP Duplicate tag !a!\n");
    assert_eq!(exec(r, "Oin$ 2<!in!>"), "?LOC Invalid location for tag !in!\n");
}

#[test]
fn test_goto_out_of_loop() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "0UA <%A$ QA-3\"E Oout$ ' > !out! QA="), "3\n");
}

#[test]
fn test_error_line_number() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "1=\n2=\n>"), "1\n2\n?BNI > not in iteration IN LINE 3\n");
}

#[test]
fn test_flow_out_of_conditional_drops_inner_loops() {
    let r = &mut Runtime::default();
    assert_eq!(exec(r, "1\"N 2< 1= F' > ' 9="), "1\n9\n");
    assert_eq!(exec(r, "1\"N 2< 1= F| > | 3= ' 9="), "1\n3\n9\n");
}

#[test]
fn test_goto_into_another_loop() {
    let r = &mut Runtime::default();
    assert_eq!(
        exec(r, "1< Oin$ > 1< !in! >"),
        "?LOC Invalid location for tag !in!\n"
    );
}
