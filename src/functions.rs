//! Built-in mathematical functions for expression evaluation.
//!
//! This module provides the implementation of the builtin functions that can
//! be used in expressions, plus the static name-to-function table the parser
//! dispatches through. Keeping dispatch in a table keeps the recognized set
//! open for extension without growing a conditional chain in the parser.
//!
//! With the default `libm` feature the implementations come from the `libm`
//! crate, which keeps the evaluator usable in no_std environments. Without
//! it, the std float intrinsics are used (hosted targets only). Depending on
//! the selected floating-point precision (f32 or f64, controlled by the
//! "f32" feature), different versions of the math functions are used.

#[cfg(all(feature = "libm", feature = "f32"))]
use libm::{
    cosf as libm_cos, powf as libm_pow, sinf as libm_sin, sqrtf as libm_sqrt, tanf as libm_tan,
};

#[cfg(all(feature = "libm", not(feature = "f32")))]
use libm::{cos as libm_cos, pow as libm_pow, sin as libm_sin, sqrt as libm_sqrt, tan as libm_tan};

use crate::Real;

/// Square root. Negative inputs yield NaN per IEEE 754.
pub fn sqrt(a: Real) -> Real {
    #[cfg(feature = "libm")]
    {
        libm_sqrt(a)
    }
    #[cfg(not(feature = "libm"))]
    {
        a.sqrt()
    }
}

/// Sine, argument in radians.
pub fn sin(a: Real) -> Real {
    #[cfg(feature = "libm")]
    {
        libm_sin(a)
    }
    #[cfg(not(feature = "libm"))]
    {
        a.sin()
    }
}

/// Cosine, argument in radians.
pub fn cos(a: Real) -> Real {
    #[cfg(feature = "libm")]
    {
        libm_cos(a)
    }
    #[cfg(not(feature = "libm"))]
    {
        a.cos()
    }
}

/// Tangent, argument in radians.
///
/// Near the poles this returns large finite values, not infinity; the graph
/// engine's discontinuity heuristic is what breaks the curve there.
pub fn tan(a: Real) -> Real {
    #[cfg(feature = "libm")]
    {
        libm_tan(a)
    }
    #[cfg(not(feature = "libm"))]
    {
        a.tan()
    }
}

/// Raises `a` to the power `b`. Used by the `^` operator.
pub fn pow(a: Real, b: Real) -> Real {
    #[cfg(feature = "libm")]
    {
        libm_pow(a, b)
    }
    #[cfg(not(feature = "libm"))]
    {
        a.powf(b)
    }
}

/// The signature of a builtin unary function.
pub type UnaryFn = fn(Real) -> Real;

/// Static lookup table mapping function names to implementations.
///
/// Name matching is case-sensitive lowercase, matching the keypad legends of
/// the calculator UIs this crate serves.
pub const BUILTINS: &[(&str, UnaryFn)] = &[("sqrt", sqrt), ("sin", sin), ("cos", cos), ("tan", tan)];

/// Look up a builtin function by name.
pub fn lookup(name: &str) -> Option<UnaryFn> {
    BUILTINS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, f)| *f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_lookup_known_names() {
        for name in ["sqrt", "sin", "cos", "tan"] {
            assert!(lookup(name).is_some(), "missing builtin {}", name);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("SQRT").is_none());
        assert!(lookup("Sin").is_none());
        assert!(lookup("log").is_none());
    }

    #[test]
    fn test_sqrt_domain_edge() {
        assert_eq!(sqrt(16.0), 4.0);
        assert!(sqrt(-1.0).is_nan());
    }

    #[test]
    fn test_pow_left_operand_zero() {
        assert_eq!(pow(0.0, 2.0), 0.0);
        assert_eq!(pow(2.0, 0.0), 1.0);
    }

    #[test]
    fn test_trig_values() {
        assert_approx_eq!(sin(0.0), 0.0);
        assert_approx_eq!(cos(0.0), 1.0);
        assert_approx_eq!(tan(crate::constants::PI / 4.0), 1.0, 1e-9);
    }
}
