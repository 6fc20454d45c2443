//! Wire format for the PRT-7 rotor protocol.
//!
//! The protocol is line oriented ASCII. Every line a device emits is either a
//! frame (`L,<ch>` loads one ciphertext symbol, `M,<±int>` rotates the
//! decoding rotor) or out-of-band informational text that is shown to the
//! operator and never decoded.
//!
//! The link has no checksums and no retransmission. Line boundaries are frame
//! boundaries, so the only framing work is turning a raw byte stream into
//! lines ([`LineAssembler`]) and turning a line into a [`Frame`] ([`parse`]).
//! A malformed frame is rejected with a [`ParseError`] and the stream simply
//! continues.
//!
//! Everything here is a pure function of its input. Nothing in this crate
//! performs I/O.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod frame;
pub mod line;

pub use errors::{ParseError, Result};
pub use frame::{Frame, LOAD_TAG, MAP_TAG, SEPARATOR, parse};
pub use line::{DEFAULT_MAX_LINE_LEN, Line, LineAssembler, classify};
