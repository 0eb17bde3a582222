//! Expression buffer: the raw text the user has keyed in.
//!
//! The buffer never parses what it holds. Before evaluation the text goes
//! through [`normalize`], which rewrites the keypad's display markers into the
//! vocabulary the evaluator understands.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::core::{CalcResult, Evaluator};

/// Display marker for the circle constant
pub const PI_MARKER: &str = "π";

/// Percent marker (`50%` means `50*0.01`)
pub const PERCENT_MARKER: &str = "%";

/// Modulo marker as typed on the keypad (`7mod3`)
pub const MODULO_MARKER: &str = "mod";

/// Raw user-entered expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl ExpressionBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends a token verbatim. Any string is accepted.
    pub fn append(&mut self, token: &str) {
        self.text.push_str(token);
    }

    /// Removes the final character, returning it. No-op on an empty buffer.
    pub fn delete_last(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Clears the buffer
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the text rewritten for the evaluator
    #[must_use]
    pub fn normalize(&self) -> String {
        normalize(&self.text)
    }

    /// Normalizes the buffer and hands it to `evaluator`.
    ///
    /// The buffer itself is never modified, so a failed expression can be
    /// corrected in place.
    pub fn evaluate<E: Evaluator + ?Sized>(&self, evaluator: &E) -> CalcResult<f64> {
        let expression = self.normalize();
        let result = evaluator.evaluate(&expression);
        match &result {
            Ok(value) => debug!(%expression, value, "evaluated"),
            Err(err) => debug!(%expression, error = %err, "evaluation failed"),
        }
        result
    }
}

/// Rewrites display markers into evaluator syntax:
///
/// - `π` becomes `pi`
/// - `%` becomes `*0.01`
/// - `mod` becomes `%`
/// - a name or `π` directly after a number, `)`, `!`, `%` or another `π`
///   gets an explicit `*` (`2π` becomes `2*pi`, `3sin(0)` becomes `3*sin(0)`)
/// - a postfix `!` becomes a call to `fact` (`5!` becomes `fact(5)`)
///
/// The marker rules run in a single left-to-right pass, so the `%` produced
/// for `mod` is never turned into `*0.01`. `mod` is only rewritten when it
/// forms a whole run of letters: `5mod3` becomes `5%3`, `modulo` is kept.
///
/// Numbers are matched whole, including an exponent (`2e3`), so letters after
/// a number are always a separate name. This keeps the evaluator from reading
/// them as a unit suffix: `5m` is `5*m`, an unknown name, not `0.005`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let substituted = marker_pattern()
        .replace_all(text, |caps: &Captures<'_>| {
            let Some(token) = caps.get(0) else {
                return String::new();
            };
            let name = match token.as_str() {
                PERCENT_MARKER => return "*0.01".to_string(),
                MODULO_MARKER => return "%".to_string(),
                PI_MARKER => "pi",
                other if other.starts_with(|c: char| c.is_ascii_alphabetic()) => other,
                number => return number.to_string(),
            };
            if ends_with_operand(&text[..token.start()]) {
                format!("*{name}")
            } else {
                name.to_string()
            }
        })
        .into_owned();
    expand_factorials(&substituted)
}

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"π|%|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?|[A-Za-z]+")
            .expect("marker pattern is valid")
    })
}

// True when the text before a name ends in something a name can multiply
fn ends_with_operand(before: &str) -> bool {
    before
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | ')' | '!' | '%' | 'π'))
}

/// Replaces every postfix `!` with `fact(..)` around its operand.
///
/// The operand is the parenthesized group (with any function name in front of
/// it) or the number or name directly before the `!`. A `!` with no operand
/// is kept for the evaluator to reject.
fn expand_factorials(text: &str) -> String {
    if !text.contains('!') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c != '!' {
            out.push(c);
            continue;
        }
        match factorial_operand_start(&out) {
            Some(start) => {
                let operand = out.split_off(start);
                out.push_str("fact(");
                out.push_str(&operand);
                out.push(')');
            }
            None => out.push('!'),
        }
    }
    out
}

fn factorial_operand_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut start = bytes.len();

    if bytes.last() == Some(&b')') {
        let mut depth = 0usize;
        loop {
            start = start.checked_sub(1)?;
            match bytes[start] {
                b')' => depth += 1,
                b'(' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
        // Function name in front of the group, without a leading number
        let mut name_start = start;
        while name_start > 0 && bytes[name_start - 1].is_ascii_alphanumeric() {
            name_start -= 1;
        }
        while name_start < start && !bytes[name_start].is_ascii_alphabetic() {
            name_start += 1;
        }
        return Some(name_start);
    }

    while start > 0 && (bytes[start - 1].is_ascii_alphanumeric() || bytes[start - 1] == b'.') {
        start -= 1;
    }
    (start < bytes.len()).then_some(start)
}
