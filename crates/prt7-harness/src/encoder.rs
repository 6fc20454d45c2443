//! Frame script builder.
//!
//! Plays the device's role: given plaintext and a rotation schedule, emits
//! the frames that decode back to that plaintext. Each plaintext symbol is
//! enciphered with the inverse of the rotor state the decoder will be in when
//! the load frame arrives.

use prt7_core::Rotor;
use prt7_proto::Frame;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Builds a frame stream that decodes to a chosen message.
///
/// Plaintext must not contain `\r` or `\n`; those would split a load frame
/// across two lines. Letters decode to upper case.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    rotor: Rotor,
    frames: Vec<Frame>,
}

impl Encoder {
    /// Empty script with an unrotated rotor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script that encodes `text` with a seeded random rotation schedule.
    ///
    /// Before each symbol a rotation in `-60..=60` is inserted with
    /// probability one half. The same seed always yields the same frames.
    pub fn scrambled(text: &str, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut encoder = Self::new();

        for symbol in text.chars() {
            if rng.gen_bool(0.5) {
                encoder.rotate(rng.gen_range(-60..=60));
            }
            encoder.load(symbol);
        }

        trace!(seed, frames = encoder.frames.len(), "scrambled script");
        encoder
    }

    /// Turn the rotor.
    pub fn rotate(&mut self, amount: i64) -> &mut Self {
        self.rotor.rotate(amount);
        self.frames.push(Frame::Map(amount));
        self
    }

    /// Emit the load frame that decodes to `plain`.
    pub fn load(&mut self, plain: char) -> &mut Self {
        self.frames.push(Frame::Load(self.rotor.unmap(plain)));
        self
    }

    /// Emit load frames for every symbol of `text`.
    pub fn text(&mut self, text: &str) -> &mut Self {
        for symbol in text.chars() {
            self.load(symbol);
        }
        self
    }

    /// Frames emitted so far.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frames in wire form, one line each.
    pub fn lines(&self) -> Vec<String> {
        self.frames.iter().map(ToString::to_string).collect()
    }

    /// Raw byte stream as a device prints it (`\r\n` after every frame).
    pub fn stream(&self) -> Vec<u8> {
        self.lines().iter().flat_map(|line| format!("{line}\r\n").into_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use prt7_core::Engine;

    use super::*;

    fn decode(frames: &[Frame]) -> String {
        let mut engine = Engine::new();
        for &frame in frames {
            engine.apply(frame);
        }
        engine.accumulator().message()
    }

    #[test]
    fn unrotated_text_is_plain() {
        let mut encoder = Encoder::new();
        encoder.text("HI");
        assert_eq!(encoder.lines(), vec!["L,H", "L,I"]);
    }

    #[test]
    fn rotation_is_compensated() {
        let mut encoder = Encoder::new();
        encoder.load('A').rotate(1).load('B').load(' ');
        assert_eq!(encoder.lines(), vec!["L,A", "M,1", "L,A", "L,Z"]);
        assert_eq!(decode(encoder.frames()), "AB ");
    }

    #[test]
    fn stream_uses_crlf() {
        let mut encoder = Encoder::new();
        encoder.rotate(-2);
        assert_eq!(encoder.stream(), b"M,-2\r\n");
    }

    #[test]
    fn scrambled_is_deterministic_and_decodes() {
        let a = Encoder::scrambled("ATTACK AT DAWN", 7);
        let b = Encoder::scrambled("ATTACK AT DAWN", 7);
        assert_eq!(a.frames(), b.frames());
        assert_eq!(decode(a.frames()), "ATTACK AT DAWN");
    }
}
