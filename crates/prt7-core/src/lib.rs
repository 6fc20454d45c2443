//! PRT-7 decoding core
//!
//! Pure decoding state for the PRT-7 protocol, completely decoupled from I/O.
//!
//! # Architecture
//!
//! A hidden message arrives as a sequence of [`prt7_proto::Frame`]s. Load
//! frames carry one ciphertext symbol which is pushed through a rotating
//! substitution cipher and appended to the message. Map frames turn the
//! cipher wheel. Frames must be applied in arrival order; reordering or
//! batching them changes the decoded text.
//!
//! Every operation here is total. There is nothing to fail once a line has
//! parsed into a frame, so the engine returns a descriptive [`Effect`] for
//! observability instead of a `Result`.
//!
//! # Components
//!
//! - [`rotor`]: 27-symbol cipher wheel with a modular zero offset
//! - [`accumulator`]: append-only decoded message
//! - [`engine`]: applies frames against a rotor and an accumulator

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod accumulator;
pub mod engine;
pub mod rotor;

pub use accumulator::Accumulator;
pub use engine::{Effect, Engine, apply};
pub use rotor::{ALPHABET, RING_SIZE, Rotor, SPACE, index_of};
