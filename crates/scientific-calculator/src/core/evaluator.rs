//! Evaluator seam.
//!
//! Expression grammar lives in an external math library; the calculator only
//! depends on [`Evaluator`]. [`MathEvaluator`] is the default implementation,
//! backed by `fasteval`, with a namespace that adds the constants and
//! functions the keypad emits.

use crate::core::{CalcError, CalcResult};

/// External evaluation capability: expression text in, number out
pub trait Evaluator {
    /// Evaluates `expression`, failing on malformed input or a non-finite
    /// result
    fn evaluate(&self, expression: &str) -> CalcResult<f64>;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, expression: &str) -> CalcResult<f64> {
        (**self).evaluate(expression)
    }
}

/// `fasteval`-backed evaluator
///
/// Supported on top of the library's own operators and functions
/// (`+ - * / % ^`, `sin`..`atanh`, `abs`, `log(base, x)`, `min`, `max`, ...):
///
/// | name          | meaning                    |
/// |---------------|----------------------------|
/// | `pi`, `e`     | constants                  |
/// | `sqrt`, `cbrt`| square and cube root       |
/// | `ln`          | natural logarithm          |
/// | `log10`, `log2` | fixed-base logarithms    |
/// | `exp`         | `e^x`                      |
/// | `fact`        | factorial of an integer    |
#[derive(Debug, Clone, Copy, Default)]
pub struct MathEvaluator;

impl MathEvaluator {
    /// Largest argument whose factorial fits in an `f64`
    pub const MAX_FACTORIAL: f64 = 170.0;

    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Evaluator for MathEvaluator {
    fn evaluate(&self, expression: &str) -> CalcResult<f64> {
        if expression.trim().is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let mut namespace = |name: &str, args: Vec<f64>| -> Option<f64> { lookup(name, &args) };
        let value = fasteval::ez_eval(expression, &mut namespace)
            .map_err(|e| CalcError::Evaluation(e.to_string()))?;

        check_finite(value)
    }
}

/// Resolves names the math library does not know itself
fn lookup(name: &str, args: &[f64]) -> Option<f64> {
    match (name, args) {
        ("pi", []) => Some(std::f64::consts::PI),
        ("e", []) => Some(std::f64::consts::E),
        ("sqrt", [x]) => Some(x.sqrt()),
        ("cbrt", [x]) => Some(x.cbrt()),
        ("ln", [x]) => Some(x.ln()),
        ("log10", [x]) => Some(x.log10()),
        ("log2", [x]) => Some(x.log2()),
        ("exp", [x]) => Some(x.exp()),
        ("fact", [x]) => factorial(*x),
        _ => None,
    }
}

/// Factorial of a non-negative integer; undefined otherwise
fn factorial(n: f64) -> Option<f64> {
    if n < 0.0 || n.fract() != 0.0 {
        return None;
    }
    if n > MathEvaluator::MAX_FACTORIAL {
        return Some(f64::INFINITY);
    }
    Some((1..=n as u64).map(|k| k as f64).product())
}

fn check_finite(value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite(value))
    }
}
