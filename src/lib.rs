#![cfg_attr(all(not(test), target_arch = "arm"), no_std)]
#![doc = r#"
# plot-rs

An expression evaluator and function graphing engine for embedded calculator UIs.

## Overview

plot-rs is the computational core of a pocket graphing calculator: a
recursive-descent arithmetic expression evaluator and a graph engine that
repeatedly samples user equations across a pixel-resolution domain, maps the
results into device coordinates, and emits draw instructions for an external
rasterizer. The host UI layer (widgets, keypads, display drivers) is a
collaborator, not part of this crate: it feeds raw text and navigation events
in, and gets numbers, readout strings, and device-space line segments out.

Key properties:
- Configurable floating-point precision (f32/f64)
- No dynamic dispatch in the hot path: builtin functions live in a static
  name-to-function table
- Evaluation failures are value-level: the public evaluator never panics and
  never returns an error type, it returns NaN (a strict variant with typed
  errors is available for diagnostics)
- Bounded equation storage via heapless strings, suitable for fixed-memory
  targets
- No_std compatibility for embedded systems

## Quick Start

Evaluating expressions:

```rust
use plot_rs::engine::{evaluate, evaluate_with_variable};

let result = evaluate("2 + 3 * 4");
assert_eq!(result, 14.0);

// `x` (or `X`) is bound per call, never through shared state
let result = evaluate_with_variable("x^2 + 1", 3.0);
assert_eq!(result, 10.0);

// All failure modes collapse to NaN
assert!(evaluate("5/0").is_nan());
assert!(evaluate("").is_nan());
```

Driving the graph engine:

```rust
use plot_rs::graph::{Event, GraphSession};

let mut session = GraphSession::new(320, 205);

// slot 0 defaults to "x^2", slot 1 to "sin(x)*3"
session.handle_event(Event::ShowGraph);
session.handle_event(Event::ZoomIn);

let draw = session.draw();
assert!(!draw.curves[0].is_empty());
```

## Grammar

Standard precedence climbing over four levels:

```text
expression := term (('+' | '-') term)*
term       := factor (('*' | '/' | '^') factor)*
factor     := '(' expression ')' | name '(' expression ')' | 'x' | 'X' | number
number     := ['+'|'-'] digits ['.' digits]
```

Recognized function names are `sqrt`, `sin`, `cos`, and `tan` (lowercase).
`^` sits at the same precedence tier as `*` and `/` and associates LEFT, so
`2^3^2` is `(2^3)^2 = 64`. This deviates from mathematical convention on
purpose and is part of the contract.

## Error Handling

The lenient evaluator is built for live typing on a calculator: a missing
closing parenthesis does not fail the expression, and division by exactly
zero yields NaN rather than an error. Callers classify the returned value
(`is_nan` renders as "Error", `is_infinite` as "Infinity") — see
[`engine::format_result`]. When you want diagnostics instead, use
[`engine::evaluate_strict`]:

```rust
use plot_rs::engine::evaluate_strict;
use plot_rs::error::ExprError;

match evaluate_strict("2 + (3 * 4", None) {
    Err(ExprError::UnmatchedParenthesis { position }) => {
        println!("missing ')' for '(' at {}", position);
    }
    other => println!("unexpected: {:?}", other),
}
```

## Feature Flags

- `f32`: Use 32-bit floating point (single precision) for calculations
- `libm` (default): Route builtin math through the `libm` crate so the
  evaluator works without std float intrinsics
"#]

// Re-export alloc for no_std compatibility
#[cfg(all(not(test), target_arch = "arm"))]
extern crate alloc;
#[cfg(all(not(test), target_arch = "arm"))]
pub use alloc::string::{String, ToString};
#[cfg(all(not(test), target_arch = "arm"))]
pub use alloc::vec::Vec;

// For non-ARM targets, keep the original behavior
#[cfg(not(all(not(test), target_arch = "arm")))]
#[cfg(not(test))]
extern crate alloc;
#[cfg(not(all(not(test), target_arch = "arm")))]
#[cfg(not(test))]
pub use alloc::string::{String, ToString};
#[cfg(not(all(not(test), target_arch = "arm")))]
#[cfg(not(test))]
pub use alloc::vec::Vec;

pub mod cursor;
pub mod engine;
pub mod error;
pub mod functions;
pub mod graph;

pub use engine::*;
pub use functions::*;

/// Define the floating-point type based on feature flags
#[cfg(feature = "f32")]
pub type Real = f32;

#[cfg(not(feature = "f32"))]
pub type Real = f64;

pub mod constants {
    use super::Real;

    #[cfg(feature = "f32")]
    pub const PI: Real = core::f32::consts::PI;
    #[cfg(feature = "f32")]
    pub const TEST_PRECISION: Real = 1e-6;

    #[cfg(not(feature = "f32"))]
    pub const PI: Real = core::f64::consts::PI;
    #[cfg(not(feature = "f32"))]
    pub const TEST_PRECISION: Real = 1e-10;
}

/// Utility macro to check if two floating point values are approximately equal
/// within a specified epsilon. NaN compares equal to NaN and same-signed
/// infinities compare equal, which is what evaluator tests want.
#[macro_export]
macro_rules! assert_approx_eq {
    // Case 1: assert_approx_eq!(left, right) -> use default epsilon
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::constants::TEST_PRECISION)
    };
    // Case 2: assert_approx_eq!(left, right, epsilon) -> use specified epsilon
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps = $epsilon;

        let message = format!(
            "assertion failed: `(left ≈ right)` \
             (left: `{}`, right: `{}`, epsilon: `{}`)",
            left_val, right_val, eps
        );

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else if left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum()
        {
            // Same-signed infinities are equal
        } else {
            assert!((left_val - right_val).abs() < eps, "{}", message);
        }
    }};
}
