//! Scripted driver.
//!
//! Replays a fixed list of [`DriverEvent`]s and records everything the
//! runtime reports, so a whole session can be asserted on afterwards.

use std::{collections::VecDeque, future::Future};

use prt7_app::{Driver, DriverEvent, Report, Summary};
use prt7_proto::LineAssembler;
use thiserror::Error;

/// Failures a [`ScriptedDriver`] can be told to inject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The report sink refused a write.
    #[error("report sink closed after {written} report(s)")]
    SinkClosed {
        /// Reports accepted before the failure
        written: usize,
    },
}

/// In-memory [`Driver`] that replays a script.
///
/// Once the script is exhausted every call to `next_event` yields
/// [`DriverEvent::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedDriver {
    events: VecDeque<DriverEvent>,
    reports: Vec<Report>,
    summary: Option<Summary>,
    report_limit: Option<usize>,
    polls: usize,
}

impl ScriptedDriver {
    /// Driver replaying `events` in order.
    pub fn new(events: impl IntoIterator<Item = DriverEvent>) -> Self {
        Self { events: events.into_iter().collect(), ..Self::default() }
    }

    /// Driver delivering each line, then closing.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(|line| DriverEvent::Line(line.into())))
    }

    /// Driver delivering the lines framed out of a raw byte stream.
    pub fn from_stream(bytes: &[u8]) -> Self {
        let mut assembler = LineAssembler::new();
        let mut lines = assembler.push(bytes);
        lines.extend(assembler.finish());
        Self::from_lines(lines)
    }

    /// Fail every report after the first `limit`.
    #[must_use]
    pub fn fail_reports_after(mut self, limit: usize) -> Self {
        self.report_limit = Some(limit);
        self
    }

    /// Reports received so far.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Summary handed over at the end of the session.
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Number of times the runtime asked for input.
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Message carried by each applied-frame report, in order.
    pub fn progress(&self) -> Vec<&str> {
        self.reports.iter().filter_map(Report::message).collect()
    }
}

impl Driver for ScriptedDriver {
    type Error = ScriptError;

    fn next_event(&mut self) -> impl Future<Output = Result<DriverEvent, Self::Error>> + Send {
        self.polls += 1;
        let event = self.events.pop_front().unwrap_or(DriverEvent::Closed);
        std::future::ready(Ok(event))
    }

    fn report(&mut self, report: &Report) -> Result<(), Self::Error> {
        if self.report_limit.is_some_and(|limit| self.reports.len() >= limit) {
            return Err(ScriptError::SinkClosed { written: self.reports.len() });
        }
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<(), Self::Error> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}
