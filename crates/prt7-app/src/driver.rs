//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the decoding runtime from the byte link and
//! the console. A driver owns the transport, turns it into whole lines, and
//! renders whatever the runtime reports. The generic [`crate::Runtime`]
//! handles all orchestration.

use std::future::Future;

use crate::{Report, Summary};

/// Input delivered to the runtime by a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    /// One complete line, terminator stripped.
    Line(String),

    /// No complete line is available yet. The session stays open.
    Idle,

    /// The operator asked to stop.
    Quit,

    /// The link reached end of stream.
    Closed,
}

/// Abstracts I/O operations for the decoding runtime.
///
/// Implementations provide the transport and the presentation; the runtime
/// provides ordering and decoding. Line boundaries are trusted as frame
/// boundaries, and no integrity checking is expected of the driver.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input.
    ///
    /// Should return [`DriverEvent::Idle`] rather than block forever when the
    /// link is quiet, so the runtime stays responsive.
    fn next_event(&mut self) -> impl Future<Output = Result<DriverEvent, Self::Error>> + Send;

    /// Present the outcome of one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn report(&mut self, report: &Report) -> Result<(), Self::Error>;

    /// Present the end-of-session summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be written.
    fn finish(&mut self, summary: &Summary) -> Result<(), Self::Error>;
}
