//! Per-line reports
//!
//! Reports produced by the session for the driver to present.

use prt7_proto::ParseError;
use serde::{Serialize, Serializer};

/// Outcome of handling one received line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Out-of-band text from the device.
    Info {
        /// The line as received.
        text: String,
    },

    /// A load frame was decoded and appended.
    Decoded {
        /// The frame line as received.
        line: String,
        /// Ciphertext symbol.
        input: char,
        /// Decoded symbol.
        output: char,
        /// Whole message after the append.
        message: String,
    },

    /// A map frame turned the rotor.
    Rotated {
        /// The frame line as received.
        line: String,
        /// Signed rotation amount.
        amount: i64,
        /// What `A` decodes to after the turn.
        a_maps_to: char,
        /// Whole message (unchanged by the turn).
        message: String,
    },

    /// A frame candidate failed to parse and was dropped.
    Rejected {
        /// The line as received.
        line: String,
        /// Why it was rejected.
        #[serde(serialize_with = "serialize_display")]
        error: ParseError,
    },
}

impl Report {
    /// Message after this line, for reports that carry one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Decoded { message, .. } | Self::Rotated { message, .. } => Some(message),
            Self::Info { .. } | Self::Rejected { .. } => None,
        }
    }

    /// Whether this line changed decoding state.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Decoded { .. } | Self::Rotated { .. })
    }
}

fn serialize_display<S: Serializer>(error: &ParseError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
