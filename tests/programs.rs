use npl::{Outcome, Result, RuntimeErrorKind};
use pretty_assertions::assert_eq;

fn run_with_input(src: &str, input: &str) -> (Result<Outcome>, String) {
    let mut output = Vec::new();
    let result = npl::run(src, input.as_bytes(), &mut output);
    (result, String::from_utf8(output).expect("output should be utf-8"))
}

fn run(src: &str) -> (Result<Outcome>, String) {
    run_with_input(src, "")
}

fn runtime_cause(src: &str) -> Option<RuntimeErrorKind> {
    run(src).0.err().and_then(|e| e.runtime_cause())
}

#[test]
fn if_else_prints_then_branch() -> Result<()> {
    let (result, output) = run("if 1 { print 5 } else { print 6 }");
    assert_eq!(Outcome::Completed, result?);
    assert_eq!("5\n", output);
    Ok(())
}

#[test]
fn halt_before_print_prints_nothing() -> Result<()> {
    let (result, output) = run("halt\nprint 1");
    assert_eq!(Outcome::Halted, result?);
    assert_eq!("", output);
    Ok(())
}

#[test]
fn reassignment_is_last_write_wins() -> Result<()> {
    let (result, output) = run("x=1\nx=2\nprint x");
    result?;
    assert_eq!("2\n", output);
    Ok(())
}

#[test]
fn equality_chains_fold_left() -> Result<()> {
    let (result, output) = run("print 1==1==1");
    result?;
    assert_eq!("1\n", output);
    Ok(())
}

#[test]
fn bare_undefined_identifier_is_name_error() {
    assert_eq!(Some(RuntimeErrorKind::Name), runtime_cause("undefinedThing"));
}

#[test]
fn division_by_zero_is_arithmetic_error() {
    assert_eq!(Some(RuntimeErrorKind::Arithmetic), runtime_cause("1/0"));
}

#[test]
fn blocks_share_the_global_environment() -> Result<()> {
    let (result, output) = run("{ x = 2 { y = x * 3 } } print x + y");
    result?;
    assert_eq!("8\n", output);
    Ok(())
}

#[test]
fn countdown_with_input() -> Result<()> {
    let src = "
        n = input
        if n == 3 {
            print n
            n = n - 1
            print n
        } else print 0
        if !(n == 2) halt
        print n * 10
    ";
    let (result, output) = run_with_input(src, "3\n");
    assert_eq!(Outcome::Completed, result?);
    assert_eq!("3\n2\n20\n", output);
    Ok(())
}

#[test]
fn lexical_errors_stop_before_running() {
    let (result, output) = run("print 1\nprint 2 % 3");
    let e = result.unwrap_err();
    assert!(e.is_lexical());
    assert_eq!(Some(2), e.line());
    assert_eq!("", output);
}

#[test]
fn parse_errors_stop_before_running() {
    let (result, output) = run("print 1\n{ print 2");
    let e = result.unwrap_err();
    assert!(e.is_syntactic());
    assert_eq!("", output);
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let (result, output) = run("print 1\nprint 2 / (1 - 1)\nprint 3");
    let e = result.unwrap_err();
    assert_eq!("[line 2] ArithmeticError: Division by zero.", e.to_string());
    assert_eq!("1\n", output);
}

#[test]
fn bad_input_is_value_error() {
    let (result, _) = run_with_input("print input", "twelve\n");
    assert_eq!(Some(RuntimeErrorKind::Value), result.err().and_then(|e| e.runtime_cause()));
}

#[test]
fn parsed_program_renders_as_s_expression() -> Result<()> {
    let program = npl::parse("if x == 1 { y = !x } else halt")?;
    assert_eq!("(program (if (== x 1) (block (= y (! x))) halt))", npl::printer::print(&program));
    Ok(())
}
