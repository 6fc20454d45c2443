//! Decoding session state machine.
//!
//! A [`Session`] consumes raw lines one at a time and turns each into a
//! [`Report`]:
//!
//! ```text
//! line ──classify──> Info ─────────────────────────────> Report::Info
//!          │
//!          └──────> Frame ──parse──> Ok(frame) ──apply──> Report::Decoded / Rotated
//!                                  └> Err(error) ───────> Report::Rejected
//! ```
//!
//! Rejected and informational lines never touch the engine.

use prt7_core::{Effect, Engine};
use prt7_proto::{Line, classify, parse};
use serde::Serialize;
use tracing::{debug, warn};

use crate::Report;

/// Line counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Load frames applied.
    pub loads: u64,
    /// Map frames applied.
    pub rotations: u64,
    /// Frame candidates that failed to parse.
    pub rejected: u64,
    /// Informational lines received.
    pub info_lines: u64,
}

impl Stats {
    /// Frames applied to the engine.
    pub fn frames_applied(&self) -> u64 {
        self.loads + self.rotations
    }

    /// Every line the session has seen.
    pub fn lines_seen(&self) -> u64 {
        self.frames_applied() + self.rejected + self.info_lines
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The operator asked to stop.
    Quit,
    /// The link reached end of stream.
    Closed,
}

/// Final state of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The assembled hidden message.
    pub message: String,
    /// Rotor offset at the end of the stream.
    pub rotor_offset: usize,
    /// Line counters.
    pub stats: Stats,
    /// Why the session ended.
    pub reason: StopReason,
}

/// One decoding session: an engine plus line statistics.
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: Engine,
    stats: Stats,
}

impl Session {
    /// Fresh session with an unrotated rotor and an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the next received line, in stream order.
    ///
    /// Applied frames carry a snapshot of the whole message, so each report
    /// costs time linear in the message length.
    pub fn handle_line(&mut self, line: &str) -> Report {
        match classify(line) {
            Line::Info(text) => {
                self.stats.info_lines += 1;
                debug!(text, "informational line");
                Report::Info { text: text.to_string() }
            },
            Line::Frame(raw) => match parse(raw) {
                Ok(frame) => {
                    let effect = self.engine.apply(frame);
                    debug!(line = raw, ?effect, "applied frame");
                    self.report_effect(raw, effect)
                },
                Err(error) => {
                    self.stats.rejected += 1;
                    warn!(line = raw, %error, "rejected frame");
                    Report::Rejected { line: raw.to_string(), error }
                },
            },
        }
    }

    fn report_effect(&mut self, line: &str, effect: Effect) -> Report {
        let message = self.engine.accumulator().message();
        match effect {
            Effect::Decoded { input, output } => {
                self.stats.loads += 1;
                Report::Decoded { line: line.to_string(), input, output, message }
            },
            Effect::Rotated { amount, .. } => {
                self.stats.rotations += 1;
                Report::Rotated {
                    line: line.to_string(),
                    amount,
                    a_maps_to: self.engine.rotor().map('A'),
                    message,
                }
            },
        }
    }

    /// Decoding state.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Counters so far.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Message assembled so far.
    pub fn message(&self) -> String {
        self.engine.accumulator().message()
    }

    /// Close the session.
    pub fn finish(self, reason: StopReason) -> Summary {
        Summary {
            message: self.engine.accumulator().message(),
            rotor_offset: self.engine.rotor().offset(),
            stats: self.stats,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use prt7_proto::ParseError;

    use super::*;

    #[test]
    fn info_lines_are_not_decoded() {
        let mut session = Session::new();
        let report = session.handle_line("Arduino ready");
        assert_eq!(report, Report::Info { text: "Arduino ready".into() });
        assert_eq!(session.message(), "");
        assert_eq!(session.stats().info_lines, 1);
    }

    #[test]
    fn decoded_report_carries_message() {
        let mut session = Session::new();
        session.handle_line("L,H");
        let report = session.handle_line("L,I");
        assert_eq!(
            report,
            Report::Decoded { line: "L,I".into(), input: 'I', output: 'I', message: "HI".into() }
        );
        assert_eq!(report.message(), Some("HI"));
    }

    #[test]
    fn rotated_report_shows_new_mapping_of_a() {
        let mut session = Session::new();
        let report = session.handle_line("M,-1");
        assert_eq!(
            report,
            Report::Rotated { line: "M,-1".into(), amount: -1, a_maps_to: ' ', message: String::new() }
        );
    }

    #[test]
    fn rejected_frame_mutates_nothing() {
        let mut session = Session::new();
        session.handle_line("M,2");
        let before = session.engine().clone();

        let report = session.handle_line("L");

        assert_eq!(
            report,
            Report::Rejected { line: "L".into(), error: ParseError::TooShort { len: 1 } }
        );
        assert!(!report.is_applied());
        assert_eq!(session.engine(), &before);
        assert_eq!(session.stats().rejected, 1);
    }

    #[test]
    fn finish_summarizes() {
        let mut session = Session::new();
        for line in ["hello", "L,A", "M,1", "L,A", "L,Z", "MX"] {
            session.handle_line(line);
        }

        let summary = session.finish(StopReason::Closed);

        assert_eq!(summary.message, "AB ");
        assert_eq!(summary.rotor_offset, 1);
        assert_eq!(
            summary.stats,
            Stats { loads: 3, rotations: 1, rejected: 1, info_lines: 1 }
        );
        assert_eq!(summary.stats.frames_applied(), 4);
        assert_eq!(summary.stats.lines_seen(), 6);
    }
}
