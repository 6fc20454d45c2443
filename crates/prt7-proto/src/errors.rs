//! Parse failures.
//!
//! A [`ParseError`] never aborts a session. The offending line is dropped,
//! nothing is mutated, and the error is only surfaced for diagnostics.

use thiserror::Error;

/// Result alias for frame parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Why a line could not be parsed as a [`crate::Frame`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line was empty.
    #[error("empty line")]
    Empty,

    /// The line ended before the separator.
    #[error("line too short: {len} character(s), need a tag and a separator")]
    TooShort {
        /// Number of characters in the line
        len: usize,
    },

    /// The character after the tag was not `,`.
    #[error("expected ',' after the tag, found {found:?}")]
    MissingSeparator {
        /// Character found in the separator position
        found: char,
    },

    /// The tag is neither `L` nor `M`.
    #[error("unknown frame tag {tag:?}")]
    UnknownTag {
        /// The tag character
        tag: char,
    },
}
