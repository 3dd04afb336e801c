use crate::analyzer::Analyzer;
use crate::error::StaticError;
use crate::registry::Registry;
use krill_parser::parse_line;

fn check(input: &str) -> Result<(), StaticError> {
    let expr = parse_line(input).unwrap();
    let registry = Registry::standard();
    Analyzer::new(&registry).check(&expr)
}

#[test]
fn test_leaves_need_no_analysis() {
    assert!(check("42").is_ok());
    assert!(check("\"hi\"").is_ok());
    assert!(check("unbound").is_ok());
}

#[test]
fn test_unknown_function_is_rejected() {
    match check("$NOPE()") {
        Err(StaticError::FunctionNotFound { name, .. }) => assert_eq!(name, "NOPE"),
        other => panic!("Expected FunctionNotFound, got {other:?}"),
    }
}

#[test]
fn test_unknown_nested_function_is_rejected() {
    match check("$PRINT($NOPE())") {
        Err(StaticError::FunctionNotFound { name, .. }) => assert_eq!(name, "NOPE"),
        other => panic!("Expected FunctionNotFound, got {other:?}"),
    }
}

#[test]
fn test_arity_mismatch() {
    match check("$CONCAT(\"a\")") {
        Err(StaticError::ArityMismatch {
            function,
            expected,
            found,
            ..
        }) => {
            assert_eq!(function, "CONCAT");
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("Expected ArityMismatch, got {other:?}"),
    }
}

#[test]
fn test_zero_argument_forms_pass_for_zero_arity_builtins() {
    assert!(check("$END").is_ok());
    assert!(check("$END()").is_ok());
}

#[test]
fn test_zero_argument_form_fails_for_nonzero_arity_builtins() {
    match check("$PRINT") {
        Err(StaticError::ArityMismatch { expected, found, .. }) => {
            assert_eq!(expected, 1);
            assert_eq!(found, 0);
        }
        other => panic!("Expected ArityMismatch, got {other:?}"),
    }
}

#[test]
fn test_literal_kind_mismatch_names_the_position() {
    match check("$ADD(\"x\", 2)") {
        Err(StaticError::ArgumentTypeMismatch { position, .. }) => assert_eq!(position, 1),
        other => panic!("Expected ArgumentTypeMismatch, got {other:?}"),
    }

    match check("$CONCAT(\"a\", 2)") {
        Err(StaticError::ArgumentTypeMismatch { position, .. }) => assert_eq!(position, 2),
        other => panic!("Expected ArgumentTypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_wildcard_accepts_any_literal_kind() {
    assert!(check("$PRINT(42)").is_ok());
    assert!(check("$PRINT(\"hi\")").is_ok());
    assert!(check("$VAR(\"x\", 5)").is_ok());
    assert!(check("$VAR(\"x\", \"text\")").is_ok());
}

#[test]
fn test_identifier_arguments_are_deferred() {
    // an identifier's true kind is unknowable until evaluation
    assert!(check("$ADD(x, 2)").is_ok());
    assert!(check("$CONCAT(x, y)").is_ok());
}

#[test]
fn test_nested_return_kind_must_match_concrete_parameter() {
    match check("$ADD($END(), 2)") {
        Err(StaticError::ReturnKindMismatch {
            function,
            nested,
            position,
            ..
        }) => {
            assert_eq!(function, "ADD");
            assert_eq!(nested, "END");
            assert_eq!(position, 1);
        }
        other => panic!("Expected ReturnKindMismatch, got {other:?}"),
    }

    match check("$CONCAT(\"a\", $ADD(1, 2))") {
        Err(StaticError::ReturnKindMismatch { position, .. }) => assert_eq!(position, 2),
        other => panic!("Expected ReturnKindMismatch, got {other:?}"),
    }
}

#[test]
fn test_wildcard_accepts_nested_call_with_no_return() {
    // Any admits every return kind, including none at all
    assert!(check("$PRINT($END())").is_ok());
    assert!(check("$VAR(\"x\", $ADD(1, 2))").is_ok());
}

#[test]
fn test_matching_nested_return_kinds_pass() {
    assert!(check("$ADD($ADD(1, 2), 3)").is_ok());
    assert!(check("$CONCAT($CONCAT(\"a\", \"b\"), \"c\")").is_ok());
}
