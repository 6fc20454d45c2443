//! Console errors.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors from the console front-end and its link.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The serial device could not be opened.
    #[error("could not open port {}: {source}", path.display())]
    Open {
        /// Device path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Reading from the link failed.
    #[error("read from link failed: {0}")]
    Read(#[source] io::Error),

    /// Writing to the console failed.
    #[error("console write failed: {0}")]
    Write(#[source] io::Error),

    /// The port name could not be read from the operator.
    #[error("could not read port name: {0}")]
    Prompt(#[source] io::Error),

    /// The operator entered no port name.
    #[error("no port name given")]
    NoPort,

    /// A report could not be encoded as JSON.
    #[error("could not encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConsoleError {
    /// Troubleshooting advice for the operator, if there is any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Open { .. } => Some(
                "check that:\n  \
                 1. the device is connected\n  \
                 2. the port name is correct\n  \
                 3. you have permission to read it (on Linux, add your user to the 'dialout' group)",
            ),
            Self::NoPort => Some("pass the device path as an argument, or use --stdin"),
            _ => None,
        }
    }
}
