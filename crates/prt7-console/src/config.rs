//! Console configuration.

use std::time::Duration;

use clap::ValueEnum;
use prt7_proto::DEFAULT_MAX_LINE_LEN;

/// Largest accepted `--max-line-len`.
pub const MAX_LINE_LEN_LIMIT: usize = 65_536;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable progress lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Console driver configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// How long to wait for link bytes before reporting the link idle
    pub idle_poll: Duration,
    /// Longest line buffered before a forced break
    pub max_line_len: usize,
    /// Show out-of-band device text
    pub show_info: bool,
    /// Report format
    pub format: OutputFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            idle_poll: Duration::from_millis(100),
            max_line_len: DEFAULT_MAX_LINE_LEN,
            show_info: true,
            format: OutputFormat::Text,
        }
    }
}
