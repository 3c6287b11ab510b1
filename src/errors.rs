//! Error types for parsing, formatting and combining primitive values.

use thiserror::Error;

/// Errors produced when converting between values and their text forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input text matches none of the labels accepted for `target`.
    #[error("cannot parse {input:?} as {target}")]
    Unparsable {
        /// Name of the type that was being parsed.
        target: &'static str,
        /// The rejected input, untrimmed.
        input: String,
    },
    /// The format specifier is not one of `G`, `C` (or `N` where supported).
    #[error("the format string {0:?} is not supported")]
    UnsupportedSpecifier(String),
}

impl FormatError {
    pub(crate) fn unparsable(target: &'static str, input: &str) -> Self {
        FormatError::Unparsable {
            target,
            input: input.to_string(),
        }
    }
}

/// Errors produced by length-sensitive [crate::gua::Gua] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Both operands of AND/OR/XOR must have the same number of yaos.
    #[error("cannot combine guas of {left} and {right} yaos")]
    CountMismatch { left: usize, right: usize },
}

/// Errors produced by checked positional access into a [crate::gua::Gua].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("index {index} is out of range for a gua of {count} yaos")]
    OutOfRange { index: usize, count: usize },
}
