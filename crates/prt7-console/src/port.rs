//! Opening the serial link.
//!
//! Line parameters (baud rate, 8N1, raw mode) are set on the device outside
//! the program, for example with `stty -F /dev/ttyUSB0 9600 raw`. The
//! console only opens the device for reading.

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use tokio::fs::File;
use tracing::info;

use crate::error::ConsoleError;

/// Open a device (or any readable path) as the frame link.
pub async fn open(path: &Path) -> Result<File, ConsoleError> {
    let file = File::open(path)
        .await
        .map_err(|source| ConsoleError::Open { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), "link opened");
    Ok(file)
}

/// Ask the operator for a port name.
pub fn prompt<I, O>(input: &mut I, out: &mut O) -> Result<PathBuf, ConsoleError>
where
    I: BufRead,
    O: Write,
{
    write!(
        out,
        "Enter the serial port name:\n  \
         - Windows: COM3, COM4, ...\n  \
         - Linux: /dev/ttyUSB0, /dev/ttyACM0, ...\n  \
         - macOS: /dev/tty.usbserial-*, /dev/tty.usbmodem*, ...\n\n\
         Port: "
    )
    .and_then(|()| out.flush())
    .map_err(ConsoleError::Write)?;

    let mut name = String::new();
    input.read_line(&mut name).map_err(ConsoleError::Prompt)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ConsoleError::NoPort);
    }
    Ok(PathBuf::from(name))
}
