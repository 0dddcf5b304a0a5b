//! The recursive-descent expression evaluator.
//!
//! Parsing and evaluation happen in one pass: each grammar level consumes
//! characters through the [`Cursor`] and produces a value directly, with no
//! AST in between. The variable binding is threaded through the evaluator as
//! an explicit field, so reentrant or (future) concurrent evaluation cannot
//! corrupt another call's binding.
//!
//! Two modes share the descent. Lenient mode is the public calculator
//! contract: every failure collapses to NaN and partial input is absorbed as
//! far as possible, because the host evaluates on every keystroke. Strict
//! mode reports the same conditions as [`ExprError`] values for hosts that
//! can display diagnostics.

extern crate alloc;

#[cfg(not(test))]
use crate::{String, ToString};
#[cfg(not(test))]
use alloc::format;
#[cfg(test)]
use std::string::{String, ToString};

use crate::Real;
use crate::cursor::Cursor;
use crate::error::{ExprError, Result};
use crate::functions;

/// How the parser reacts to input the grammar cannot recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Best-effort: absorb what the grammar cannot recognize and yield NaN.
    Lenient,
    /// Report every leniency as a typed error.
    Strict,
}

/// Nesting bound for parenthesized expressions and function arguments.
const MAX_RECURSION_DEPTH: usize = 256;

struct Evaluator<'a> {
    cursor: Cursor<'a>,
    x: Option<Real>,
    mode: ParseMode,
    depth: usize,
}

impl Evaluator<'_> {
    /// `expression := term (('+' | '-') term)*`
    fn expression(&mut self) -> Result<Real> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            self.depth -= 1;
            return match self.mode {
                ParseMode::Strict => Err(ExprError::RecursionLimit),
                ParseMode::Lenient => Ok(Real::NAN),
            };
        }
        let result = self.expression_inner();
        self.depth -= 1;
        result
    }

    fn expression_inner(&mut self) -> Result<Real> {
        let mut value = self.term()?;

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.eat('+') {
                value += self.term()?;
            } else if self.cursor.eat('-') {
                value -= self.term()?;
            } else {
                break;
            }
        }

        Ok(value)
    }

    /// `term := factor (('*' | '/' | '^') factor)*`
    ///
    /// `^` lives on this tier and associates LEFT together with `*` and `/`:
    /// `2^3^2` is `(2^3)^2`. Deliberate deviation from mathematical
    /// convention, preserved as part of the contract.
    fn term(&mut self) -> Result<Real> {
        let mut value = self.factor()?;

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.eat('*') {
                value *= self.factor()?;
            } else if self.cursor.eat('/') {
                let divisor = self.factor()?;
                if divisor == 0.0 {
                    // Exactly-zero divisors fail the whole term; IEEE
                    // infinities from overflow propagate as values instead.
                    return match self.mode {
                        ParseMode::Strict => Err(ExprError::DivideByZero),
                        ParseMode::Lenient => Ok(Real::NAN),
                    };
                }
                value /= divisor;
            } else if self.cursor.eat('^') {
                let exponent = self.factor()?;
                value = functions::pow(value, exponent);
            } else {
                break;
            }
        }

        Ok(value)
    }

    /// `factor := '(' expression ')' | name '(' expression ')' | 'x' | 'X' | number`
    fn factor(&mut self) -> Result<Real> {
        self.cursor.skip_whitespace();

        if self.cursor.eat('(') {
            let open = self.cursor.pos() - 1;
            let value = self.expression()?;
            self.cursor.skip_whitespace();
            if !self.cursor.eat(')') && self.mode == ParseMode::Strict {
                return Err(ExprError::UnmatchedParenthesis { position: open });
            }
            return Ok(value);
        }

        if self.cursor.eat('x') || self.cursor.eat('X') {
            return match self.x {
                Some(value) => Ok(value),
                None => match self.mode {
                    ParseMode::Strict => Err(ExprError::UnknownVariable {
                        name: "x".to_string(),
                    }),
                    ParseMode::Lenient => Ok(Real::NAN),
                },
            };
        }

        for (name, function) in functions::BUILTINS {
            if self.cursor.eat_keyword(name) {
                self.cursor.skip_whitespace();
                if self.cursor.eat('(') {
                    let open = self.cursor.pos() - 1;
                    let arg = self.expression()?;
                    self.cursor.skip_whitespace();
                    if !self.cursor.eat(')') && self.mode == ParseMode::Strict {
                        return Err(ExprError::UnmatchedParenthesis { position: open });
                    }
                    return Ok(function(arg));
                }
                if self.mode == ParseMode::Strict {
                    return Err(ExprError::Syntax(format!(
                        "expected '(' after function name '{}'",
                        name
                    )));
                }
                // Lenient mode: a function name with no argument list falls
                // through to the number parser without being applied
                // ("sqrt4" evaluates to 4).
                break;
            }
        }

        self.number()
    }

    /// `number := ['+'|'-'] digits ['.' digits]`
    fn number(&mut self) -> Result<Real> {
        self.cursor.skip_whitespace();
        let position = self.cursor.pos();

        match self.cursor.scan_number() {
            Some(text) => text.parse::<Real>().map_err(|_| {
                ExprError::Syntax(format!("invalid number '{}' at position {}", text, position))
            }),
            None => match self.mode {
                ParseMode::Strict => Err(ExprError::Syntax(format!(
                    "unrecognized input at position {}",
                    position
                ))),
                ParseMode::Lenient => Ok(Real::NAN),
            },
        }
    }
}

fn eval_internal(expr: &str, x: Option<Real>, mode: ParseMode) -> Result<Real> {
    let mut evaluator = Evaluator {
        cursor: Cursor::new(expr),
        x,
        mode,
        depth: 0,
    };

    evaluator.cursor.skip_whitespace();
    if evaluator.cursor.is_at_end() {
        return Err(ExprError::Empty);
    }

    let value = evaluator.expression()?;

    if mode == ParseMode::Strict {
        evaluator.cursor.skip_whitespace();
        if !evaluator.cursor.is_at_end() {
            return Err(ExprError::Syntax(format!(
                "unexpected trailing input at position {}",
                evaluator.cursor.pos()
            )));
        }
    }

    Ok(value)
}

/// Evaluate a full arithmetic expression with no free variable.
///
/// Fails softly: empty input, syntax the grammar cannot recognize, a free
/// `x` with no binding, and division by exactly zero all yield NaN. Callers
/// classify the result (`is_nan`, `is_infinite`) before display — see
/// [`format_result`].
pub fn evaluate(expr: &str) -> Real {
    eval_internal(expr, None, ParseMode::Lenient).unwrap_or(Real::NAN)
}

/// Evaluate an expression where `x`/`X` is bound to `x_value` for this call.
///
/// The binding is scoped to this call only; repeated calls with different
/// values never interfere.
pub fn evaluate_with_variable(expr: &str, x_value: Real) -> Real {
    eval_internal(expr, Some(x_value), ParseMode::Lenient).unwrap_or(Real::NAN)
}

/// Evaluate with every leniency reported as a typed error.
///
/// Same grammar and numeric semantics as [`evaluate`]; pass `Some(x)` to
/// bind the variable.
pub fn evaluate_strict(expr: &str, x: Option<Real>) -> Result<Real> {
    eval_internal(expr, x, ParseMode::Strict)
}

/// Render an evaluation result the way the calculator readout shows it.
///
/// NaN renders as `"Error"`, infinities as `"Infinity"`, integral values
/// without a fractional part, and everything else in shortest round-trip
/// form.
pub fn format_result(value: Real) -> String {
    if value.is_nan() {
        "Error".to_string()
    } else if value.is_infinite() {
        "Infinity".to_string()
    } else if value == (value as i64) as Real && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
