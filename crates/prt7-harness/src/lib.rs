//! Deterministic test harness for PRT-7 decoding.
//!
//! Scripted I/O, a frame encoder and a reference model, so decoding can be
//! exercised end to end without a serial device.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod encoder;
pub mod model;
pub mod scripted;

pub use encoder::Encoder;
pub use model::{ModelDecoder, ReferenceRotor};
pub use scripted::{ScriptError, ScriptedDriver};
