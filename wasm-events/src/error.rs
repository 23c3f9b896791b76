//! Error types.
//!
//! [`ParseError`] is what a reader reports through
//! [`Delegate::on_error`](crate::Delegate::on_error); [`StreamError`] is a
//! failure of the sink behind a [`WriteStream`](crate::stream::WriteStream).

use crate::types::Offset;
use thiserror::Error;

/// A problem the reader found in its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{message}", .offset.map(|o| format!("{o:#010x}: ")).unwrap_or_default())]
pub struct ParseError {
    /// Offset in the input where the problem was detected, if known.
    pub offset: Option<Offset>,
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            offset: None,
            message: message.into(),
        }
    }

    pub fn at(offset: Offset, message: impl Into<String>) -> Self {
        Self {
            offset: Some(offset),
            message: message.into(),
        }
    }
}

/// Failure writing trace output.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("trace sink write failed: {0}")]
    Io(#[from] std::io::Error),
}
