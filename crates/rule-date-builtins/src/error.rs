//! Error types for rule-date-builtins operations.
//!
//! These are hard errors. A builtin whose condition simply does not hold
//! reports `Ok(false)` instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    #[error("Invalid {datatype} lexical form '{lexical}': {reason}")]
    InvalidLexical {
        datatype: String,
        lexical: String,
        reason: String,
    },

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Builtin '{builtin}' expects {expected} arguments, got {actual}")]
    ArityMismatch {
        builtin: String,
        expected: usize,
        actual: usize,
    },

    #[error("Builtin '{0}' cannot be used in a rule head")]
    NotUsableInHead(String),
}

impl BuiltinError {
    pub(crate) fn invalid_lexical(
        datatype: impl Into<String>,
        lexical: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidLexical {
            datatype: datatype.into(),
            lexical: lexical.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuiltinError>;
