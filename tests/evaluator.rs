//! Integration tests for the expression evaluator
//! These tests exercise the public contract at increasing levels of
//! complexity, ending with the failure-mode taxonomy.

use plot_rs::assert_approx_eq;
use plot_rs::engine::{evaluate, evaluate_strict, evaluate_with_variable, format_result};
use plot_rs::error::ExprError;
use plot_rs::{Real, functions};

/// Level 1: Basic expression evaluation
#[test]
fn test_basic_expression_evaluation() {
    // Simple arithmetic
    assert_eq!(evaluate("2+3"), 5.0);
    assert_eq!(evaluate("10-4"), 6.0);
    assert_eq!(evaluate("5*6"), 30.0);
    assert_eq!(evaluate("20/4"), 5.0);
    assert_eq!(evaluate("2 * 3 + 4"), 10.0);
    assert_eq!(evaluate("2 * (3 + 4)"), 14.0);

    // Whitespace is skippable anywhere between tokens
    assert_eq!(evaluate(" \t 2 +\t3 "), 5.0);

    // Decimal forms
    assert_eq!(evaluate("1.5*2"), 3.0);
    assert_eq!(evaluate(".5+.25"), 0.75);
}

/// Level 2: Precedence and associativity
#[test]
fn test_precedence_and_associativity() {
    assert_eq!(evaluate("2+3*4"), 14.0);
    assert_eq!(evaluate("(2+3)*4"), 20.0);

    // ^ shares the multiplicative tier and associates left
    assert_eq!(evaluate("2^3^2"), 64.0);
    assert_eq!(evaluate("2^3"), 8.0);
    assert_eq!(evaluate("12/2/3"), 2.0);
    assert_eq!(evaluate("2*3^2"), 36.0);

    // additive chain stays left-associative
    assert_eq!(evaluate("10-4-3"), 3.0);
}

/// Level 3: Builtin functions
#[test]
fn test_builtin_functions() {
    assert_eq!(evaluate("sqrt(16)"), 4.0);
    assert_eq!(evaluate("sin(0)"), 0.0);
    assert_eq!(evaluate("cos(0)"), 1.0);
    assert_approx_eq!(evaluate("tan(0)"), 0.0);

    // values agree with the builtin table implementations
    assert_approx_eq!(evaluate("sin(0.5)"), functions::sin(0.5));
    assert_approx_eq!(evaluate("cos(0.5)"), functions::cos(0.5));

    // nested calls and calls inside arithmetic
    assert_eq!(evaluate("sqrt(sqrt(16))"), 2.0);
    assert_eq!(evaluate("sqrt(9)+sqrt(16)"), 7.0);
    assert_eq!(evaluate("2*sin(0)+1"), 1.0);
}

/// Level 4: Variable binding
#[test]
fn test_variable_binding() {
    assert_eq!(evaluate_with_variable("x^2", 3.0), 9.0);
    assert_eq!(evaluate_with_variable("x^2", -3.0), 9.0);
    assert_eq!(evaluate_with_variable("2*x+1", 0.5), 2.0);

    // case-insensitive variable
    assert_eq!(evaluate_with_variable("X", 7.0), 7.0);

    // binding is irrelevant when the expression has no x
    for v in [-100.0, 0.0, 42.0] {
        assert_eq!(evaluate_with_variable("3*4", v), evaluate("3*4"));
    }

    // without a binding, x is an error rather than a stale value
    assert!(evaluate("x").is_nan());
    assert!(matches!(
        evaluate_strict("x", None),
        Err(ExprError::UnknownVariable { .. })
    ));
}

/// Level 5: Numeric edge cases
#[test]
fn test_numeric_edge_cases() {
    // division by exactly zero is NaN, not infinity
    assert!(evaluate("5/0").is_nan());
    assert!(evaluate("0/0").is_nan());
    assert_eq!(evaluate("5/2"), 2.5);

    // IEEE overflow propagates as infinity
    let huge = evaluate("9999999999^99");
    assert!(huge.is_infinite());
    assert_eq!(format_result(huge), "Infinity");

    // NaN propagates through subsequent operations
    assert!(evaluate("1+5/0").is_nan());
    assert!(evaluate_with_variable("sqrt(x)+1", -4.0).is_nan());
}

/// Level 6: Lenient recovery while typing
#[test]
fn test_lenient_recovery() {
    // unmatched parentheses keep the partial value
    assert_eq!(evaluate("(2+3"), 5.0);
    assert_eq!(evaluate("((2+3)*4"), 20.0);
    assert_eq!(evaluate("sin(0"), 0.0);

    // trailing garbage after a complete expression is ignored
    assert_eq!(evaluate("2+3)"), 5.0);

    // unrecognizable input collapses to NaN
    assert!(evaluate("").is_nan());
    assert!(evaluate("invalid").is_nan());
    assert!(evaluate("q").is_nan());
    assert_eq!(format_result(evaluate("q")), "Error");
}

/// Level 7: Strict mode reports what lenient mode absorbs
#[test]
fn test_strict_mode_diagnostics() {
    assert_eq!(evaluate_strict("2+3", None), Ok(5.0));
    assert_eq!(evaluate_strict("x^2", Some(4.0)), Ok(16.0));

    assert_eq!(evaluate_strict("", None), Err(ExprError::Empty));
    assert_eq!(evaluate_strict("5/0", None), Err(ExprError::DivideByZero));
    assert!(matches!(
        evaluate_strict("(2+3", None),
        Err(ExprError::UnmatchedParenthesis { position: 0 })
    ));
    assert!(matches!(
        evaluate_strict("2+(3*(4", None),
        Err(ExprError::UnmatchedParenthesis { .. })
    ));
    assert!(matches!(
        evaluate_strict("invalid", None),
        Err(ExprError::Syntax(_))
    ));
    assert!(matches!(
        evaluate_strict("2+3)", None),
        Err(ExprError::Syntax(_))
    ));
}

/// Determinism: identical input yields bit-identical output
#[test]
fn test_determinism() {
    let exprs = ["2+3*4", "sin(1.5)+cos(2.5)", "sqrt(2)^2", "1/3"];
    for expr in exprs {
        let first = evaluate(expr);
        for _ in 0..10 {
            assert_eq!(first.to_bits(), evaluate(expr).to_bits(), "{}", expr);
        }
    }
}

/// Result formatting follows the calculator readout contract
#[test]
fn test_result_formatting() {
    assert_eq!(format_result(Real::NAN), "Error");
    assert_eq!(format_result(Real::INFINITY), "Infinity");
    assert_eq!(format_result(Real::NEG_INFINITY), "Infinity");
    assert_eq!(format_result(evaluate("2+3")), "5");
    assert_eq!(format_result(evaluate("-2-3")), "-5");
    assert_eq!(format_result(evaluate("5/2")), "2.5");
}
