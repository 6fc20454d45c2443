//! Generic decoding loop.
//!
//! [`Runtime`] pulls events from a [`Driver`], feeds lines through the
//! [`Session`] strictly in arrival order, and hands every report back to the
//! driver. There is no timeout here: a quiet link keeps the session open
//! until the driver reports [`DriverEvent::Quit`] or [`DriverEvent::Closed`].

use tracing::{info, trace};

use crate::{Driver, DriverEvent, Session, StopReason, Summary};

/// Receive/decode/report loop over a [`Driver`].
pub struct Runtime<D: Driver> {
    driver: D,
    session: Session,
}

impl<D: Driver> Runtime<D> {
    /// Runtime with a fresh session.
    pub fn new(driver: D) -> Self {
        Self::with_session(driver, Session::new())
    }

    /// Runtime continuing an existing session.
    pub fn with_session(driver: D, session: Session) -> Self {
        Self { driver, session }
    }

    /// Run until the driver quits or closes.
    ///
    /// The session is consumed into the returned [`Summary`] and replaced by
    /// a fresh one.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if reading, reporting or finishing fails.
    /// Parse failures are not errors; they are reported and skipped.
    pub async fn run(&mut self) -> Result<Summary, D::Error> {
        info!("decoding session started");

        let reason = loop {
            match self.driver.next_event().await? {
                DriverEvent::Line(line) => {
                    let report = self.session.handle_line(&line);
                    self.driver.report(&report)?;
                },
                DriverEvent::Idle => trace!("link idle"),
                DriverEvent::Quit => break StopReason::Quit,
                DriverEvent::Closed => break StopReason::Closed,
            }
        };

        let summary = std::mem::take(&mut self.session).finish(reason);
        self.driver.finish(&summary)?;

        info!(
            ?reason,
            frames = summary.stats.frames_applied(),
            rejected = summary.stats.rejected,
            len = summary.message.chars().count(),
            "decoding session finished"
        );
        Ok(summary)
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Give back the driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
