//! Reference model for model-based testing.
//!
//! The model is a deliberately naive rendition of the cipher wheel: a ring of
//! symbols that is physically turned one step at a time, and a cursor walk to
//! find a mapping. It is slow but obviously correct, and serves as the oracle
//! against which the O(1) rotor is verified.

use std::collections::VecDeque;

use prt7_proto::Frame;

/// Canonical ring, built independently of `prt7_core::ALPHABET`.
fn canonical_ring() -> VecDeque<char> {
    ('A'..='Z').chain(std::iter::once(' ')).collect()
}

/// Ring-walking cipher wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRotor {
    /// Front of the deque is the current zero position
    ring: VecDeque<char>,
}

impl ReferenceRotor {
    /// Unrotated wheel.
    pub fn new() -> Self {
        Self { ring: canonical_ring() }
    }

    /// Turn the wheel one step at a time, `|steps|` times.
    pub fn rotate(&mut self, steps: i64) {
        for _ in 0..steps.unsigned_abs() {
            if steps > 0 {
                self.ring.rotate_left(1);
            } else {
                self.ring.rotate_right(1);
            }
        }
    }

    /// Walk from the zero position as many steps as the symbol's position in
    /// the unrotated ring.
    pub fn map(&self, symbol: char) -> char {
        let upper = symbol.to_ascii_uppercase();
        let Some(steps) = canonical_ring().iter().position(|&s| s == upper) else {
            return symbol;
        };
        self.ring.iter().cycle().nth(steps).copied().unwrap_or(symbol)
    }

    /// Symbol currently at the zero position.
    pub fn head(&self) -> Option<char> {
        self.ring.front().copied()
    }
}

impl Default for ReferenceRotor {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference decoder: a [`ReferenceRotor`] and a plain vector of output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelDecoder {
    rotor: ReferenceRotor,
    message: Vec<char>,
}

impl ModelDecoder {
    /// Fresh decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one frame.
    pub fn apply(&mut self, frame: Frame) {
        match frame {
            Frame::Load(symbol) => self.message.push(self.rotor.map(symbol)),
            Frame::Map(steps) => self.rotor.rotate(steps),
        }
    }

    /// Wheel state.
    pub fn rotor(&self) -> &ReferenceRotor {
        &self.rotor
    }

    /// Decoded message.
    pub fn message(&self) -> String {
        self.message.iter().collect()
    }
}
