//! Calculator core: expression buffer, evaluator seam, memory register and
//! panel state.
//!
//! Nothing in here knows how the calculator is rendered. Front ends talk to
//! the core through [`crate::controller::InputController`].

pub mod buffer;
pub mod evaluator;
pub mod memory;
pub mod view;

pub use buffer::ExpressionBuffer;
pub use evaluator::{Evaluator, MathEvaluator};
pub use memory::MemoryRegister;
pub use view::{Panel, SizeMode, UiState};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// The math library rejected the expression (syntax or unknown name)
    #[error("Invalid expression: {0}")]
    Evaluation(String),
    /// The expression evaluated to NaN or an infinity
    #[error("Result is not a finite number: {0}")]
    NonFinite(f64),
    /// A memory operation was handed a NaN or infinite operand
    #[error("Invalid operand: {0}")]
    InvalidOperand(f64),
}

/// Formats a value for the result slot.
///
/// Integers print without a fractional part; everything else is rounded to
/// `precision` fractional digits with trailing zeros trimmed.
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    if value.is_nan() || value.is_infinite() {
        return value.to_string();
    }
    let formatted = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let fixed = format!("{value:.precision$}");
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    };
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}
