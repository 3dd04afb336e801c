use crate::error::RuntimeError;
use crate::evaluator::Evaluator;
use crate::registry::Registry;
use crate::tests::capture_session;
use krill_parser::{Literal, parse_line};

#[test]
fn test_literal_evaluates_to_itself() {
    let registry = Registry::standard();
    let (mut session, _) = capture_session();
    let evaluator = Evaluator::new(&registry);

    let expr = parse_line("42").unwrap();
    let result = evaluator.evaluate(&expr, &mut session).unwrap();
    assert_eq!(result, Some(Literal::number("42")));

    let expr = parse_line("\"hi\"").unwrap();
    let result = evaluator.evaluate(&expr, &mut session).unwrap();
    assert_eq!(result, Some(Literal::string("hi")));
}

#[test]
fn test_identifier_returns_the_bound_value() {
    let registry = Registry::standard();
    let (mut session, _) = capture_session();
    let evaluator = Evaluator::new(&registry);

    session
        .environment_mut()
        .define("x".to_string(), Literal::number("5"));

    let expr = parse_line("x").unwrap();
    let result = evaluator.evaluate(&expr, &mut session).unwrap();
    assert_eq!(result, Some(Literal::number("5")));
}

#[test]
fn test_unbound_identifier_fails_at_evaluation() {
    let registry = Registry::standard();
    let (mut session, _) = capture_session();
    let evaluator = Evaluator::new(&registry);

    let expr = parse_line("ghost").unwrap();
    match evaluator.evaluate(&expr, &mut session) {
        Err(RuntimeError::UnknownIdentifier { name, .. }) => assert_eq!(name, "ghost"),
        other => panic!("Expected UnknownIdentifier, got {other:?}"),
    }
}

#[test]
fn test_nested_calls_evaluate_inside_out() {
    let registry = Registry::standard();
    let (mut session, _) = capture_session();
    let evaluator = Evaluator::new(&registry);

    let expr = parse_line("$ADD($ADD(1, 2), 3)").unwrap();
    let result = evaluator.evaluate(&expr, &mut session).unwrap();
    assert_eq!(result, Some(Literal::number("6")));
}

#[test]
fn test_void_argument_is_a_runtime_error() {
    // $PRINT($END()) passes static analysis because Any admits a no-return
    // call, but END produces nothing to print
    let registry = Registry::standard();
    let (mut session, output) = capture_session();
    let evaluator = Evaluator::new(&registry);

    let expr = parse_line("$PRINT($END())").unwrap();
    match evaluator.evaluate(&expr, &mut session) {
        Err(RuntimeError::VoidArgument {
            function, position, ..
        }) => {
            assert_eq!(function, "PRINT");
            assert_eq!(position, 1);
        }
        other => panic!("Expected VoidArgument, got {other:?}"),
    }

    // the nested call's own side effect had already happened: arguments are
    // evaluated left to right before the failure is noticed
    assert!(session.shutdown_requested());
    assert_eq!(output.contents(), "");
}

#[test]
fn test_arguments_see_earlier_side_effects() {
    let registry = Registry::standard();
    let (mut session, output) = capture_session();
    let evaluator = Evaluator::new(&registry);

    // the binding from one line is visible to identifier arguments on the
    // next, through the same session
    let bind = parse_line("$VAR(\"greeting\", \"hello\")").unwrap();
    evaluator.evaluate(&bind, &mut session).unwrap();

    let read = parse_line("$PRINT(greeting)").unwrap();
    evaluator.evaluate(&read, &mut session).unwrap();
    assert_eq!(output.contents(), "hello\n");
}
