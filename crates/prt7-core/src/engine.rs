//! Frame application.
//!
//! The engine has exactly two transitions over the (rotor, accumulator)
//! pair:
//!
//! ```text
//! Load(c) ──> accumulator.append(rotor.map(c))     rotor untouched
//! Map(n)  ──> rotor.rotate(n)                      accumulator untouched
//! ```
//!
//! Frames that failed to parse never reach the engine. Application is
//! strictly sequential; a concurrent caller must serialize calls to
//! [`Engine::apply`] behind a single owner.

use prt7_proto::Frame;
use serde::Serialize;
use tracing::trace;

use crate::{accumulator::Accumulator, rotor::Rotor};

/// Observable result of applying one frame.
///
/// Carries what changed so a front-end can show progress without inspecting
/// engine state. Not needed for correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// A load frame decoded `input` into `output` and appended it.
    Decoded {
        /// Ciphertext symbol from the frame
        input: char,
        /// Symbol appended to the message
        output: char,
    },

    /// A map frame turned the rotor.
    Rotated {
        /// Signed amount from the frame
        amount: i64,
        /// Rotor offset after the turn
        offset: usize,
    },
}

/// Apply one frame against a rotor and an accumulator.
pub fn apply(frame: Frame, rotor: &mut Rotor, accumulator: &mut Accumulator) -> Effect {
    match frame {
        Frame::Load(input) => {
            let output = rotor.map(input);
            accumulator.append(output);
            trace!(?input, ?output, len = accumulator.len(), "decoded symbol");
            Effect::Decoded { input, output }
        },
        Frame::Map(amount) => {
            rotor.rotate(amount);
            trace!(amount, offset = rotor.offset(), "rotated rotor");
            Effect::Rotated { amount, offset: rotor.offset() }
        },
    }
}

/// Decoding session state: one rotor and one accumulator.
///
/// Created at session start with an unrotated rotor and an empty message,
/// and held for the session's whole lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    rotor: Rotor,
    accumulator: Accumulator,
}

impl Engine {
    /// Fresh engine: offset 0, empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the next frame in stream order.
    pub fn apply(&mut self, frame: Frame) -> Effect {
        apply(frame, &mut self.rotor, &mut self.accumulator)
    }

    /// Current rotor.
    pub fn rotor(&self) -> &Rotor {
        &self.rotor
    }

    /// Decoded message so far.
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }
}
