//! Console front-end for PRT-7 decoding
//!
//! A thin shell over [`prt7_app::Driver`] that reads a serial device (or
//! stdin), prints progress for every frame, and stops on `Q` + Enter. All
//! decoding lives in [`prt7_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod driver;
pub mod error;
pub mod port;
pub mod render;

pub use config::{ConsoleConfig, OutputFormat};
pub use driver::{ConsoleDriver, spawn_quit_watcher};
pub use error::ConsoleError;
pub use prt7_app::{Driver, DriverEvent, Report, Runtime, Summary};
