//! Application layer for PRT-7 decoders
//!
//! Pure session state machine and a generic runtime, so the same
//! orchestration drives a serial console in production and scripted input in
//! tests.
//!
//! # Components
//!
//! - [`Session`]: line handling (classify, parse, apply) and statistics
//! - [`Report`]: what happened to one received line
//! - [`Driver`]: trait for platform-specific I/O
//! - [`Runtime`]: generic receive/decode/report loop over a [`Driver`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod report;
mod runtime;
mod session;

pub use driver::{Driver, DriverEvent};
pub use report::Report;
pub use runtime::Runtime;
pub use session::{Session, Stats, StopReason, Summary};
