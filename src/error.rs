//! Error types and handling for the plot-rs crate.
//!
//! This module defines the error types used by the strict evaluation mode.
//! The lenient public evaluator never surfaces these: it collapses every
//! failure to NaN, which is what a calculator display loop wants. Strict
//! mode exists so that hosts that can show diagnostics get them.

extern crate alloc;
use alloc::string::String;

#[cfg(not(test))]
use core::result;
#[cfg(test)]
use std::result;

/// Result type used throughout the crate.
///
/// This is a convenience type alias that uses the `ExprError` type for the error variant.
pub type Result<T> = result::Result<T, ExprError>;

/// Error type for strict-mode expression parsing and evaluation.
///
/// Each variant corresponds to one leniency of the best-effort parser. The
/// lenient mode recovers from (or absorbs) all of these; strict mode reports
/// them.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// The input was empty or contained only whitespace.
    Empty,

    /// Error during syntax analysis.
    ///
    /// The parser encountered a character sequence the grammar cannot
    /// recognize. The string contains a detailed error message.
    Syntax(String),

    /// An opening parenthesis with no matching closing parenthesis.
    ///
    /// `position` is the byte offset of the unmatched `(` in the input.
    /// The lenient parser consumes as much as it can and keeps the partial
    /// result instead.
    UnmatchedParenthesis { position: usize },

    /// A variable was referenced but no binding was supplied.
    ///
    /// Raised when the expression contains `x` but the caller used the
    /// no-variable entry point.
    UnknownVariable { name: String },

    /// A function-style identifier that is not in the builtin table.
    UnknownFunction { name: String },

    /// Division by exactly zero.
    ///
    /// Only an exactly-zero divisor raises this; IEEE infinities produced by
    /// overflow propagate as values.
    DivideByZero,

    /// Expression nesting exceeded the recursion guard.
    RecursionLimit,
}

#[cfg(not(test))]
use core::fmt;
#[cfg(test)]
use std::fmt;

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Empty => write!(f, "Empty expression"),
            ExprError::Syntax(err) => write!(f, "Syntax error: {}", err),
            ExprError::UnmatchedParenthesis { position } => {
                write!(f, "Unmatched parenthesis at position {}", position)
            }
            ExprError::UnknownVariable { name } => {
                write!(f, "Unknown variable: '{}'", name)
            }
            ExprError::UnknownFunction { name } => {
                write!(f, "Unknown function: '{}'", name)
            }
            ExprError::DivideByZero => write!(f, "Division by zero"),
            ExprError::RecursionLimit => write!(f, "Recursion limit exceeded"),
        }
    }
}

impl From<String> for ExprError {
    fn from(err: String) -> ExprError {
        ExprError::Syntax(err)
    }
}
