//! Console driver: link bytes in, progress lines out.
//!
//! The link is any [`AsyncRead`]: a serial device opened as a file, stdin, or
//! an in-memory buffer in tests. Reads are bounded by
//! [`ConsoleConfig::idle_poll`] so a quiet link yields [`DriverEvent::Idle`]
//! instead of blocking, and the operator's quit request is raced against
//! every read.

use std::{
    collections::VecDeque,
    future::Future,
    io::{self, BufRead, Write},
    thread,
};

use prt7_app::{Driver, DriverEvent, Report, Summary};
use prt7_proto::LineAssembler;
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    sync::mpsc,
};
use tracing::debug;

use crate::{
    config::{ConsoleConfig, OutputFormat},
    error::ConsoleError,
    render::{render_report, render_summary},
};

/// Bytes requested from the link per read.
const READ_CHUNK: usize = 256;

/// [`Driver`] over a byte link and a text sink.
pub struct ConsoleDriver<R, W> {
    reader: R,
    out: W,
    assembler: LineAssembler,
    pending: VecDeque<String>,
    quit: Option<mpsc::Receiver<()>>,
    config: ConsoleConfig,
    eof: bool,
}

impl<R, W> ConsoleDriver<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: Write + Send,
{
    /// Driver reading frames from `reader` and writing progress to `out`.
    pub fn new(reader: R, out: W, config: ConsoleConfig) -> Self {
        Self {
            reader,
            out,
            assembler: LineAssembler::with_max_len(config.max_line_len),
            pending: VecDeque::new(),
            quit: None,
            config,
            eof: false,
        }
    }

    /// Stop the session when `quit` receives a message.
    #[must_use]
    pub fn with_quit(mut self, quit: mpsc::Receiver<()>) -> Self {
        self.quit = Some(quit);
        self
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    async fn poll_link(&mut self) -> Result<DriverEvent, ConsoleError> {
        if let Some(line) = self.pending.pop_front() {
            return Ok(DriverEvent::Line(line));
        }
        if self.eof {
            return Ok(DriverEvent::Closed);
        }

        let mut buf = [0u8; READ_CHUNK];
        let read = tokio::select! {
            () = wait_for_quit(&mut self.quit) => return Ok(DriverEvent::Quit),
            read = tokio::time::timeout(self.config.idle_poll, self.reader.read(&mut buf)) => read,
        };

        let Ok(read) = read else {
            return Ok(DriverEvent::Idle);
        };
        let n = read.map_err(ConsoleError::Read)?;

        if n == 0 {
            debug!(pending = self.assembler.pending(), "link reached end of stream");
            self.eof = true;
            return Ok(self.assembler.finish().map_or(DriverEvent::Closed, DriverEvent::Line));
        }

        self.pending.extend(self.assembler.push(&buf[..n]));
        Ok(self.pending.pop_front().map_or(DriverEvent::Idle, DriverEvent::Line))
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.out, "{text}").and_then(|()| self.out.flush()).map_err(ConsoleError::Write)
    }
}

impl<R, W> Driver for ConsoleDriver<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: Write + Send,
{
    type Error = ConsoleError;

    fn next_event(&mut self) -> impl Future<Output = Result<DriverEvent, Self::Error>> + Send {
        self.poll_link()
    }

    fn report(&mut self, report: &Report) -> Result<(), Self::Error> {
        if !self.config.show_info && matches!(report, Report::Info { .. }) {
            return Ok(());
        }

        let text = match self.config.format {
            OutputFormat::Text => render_report(report),
            OutputFormat::Json => serde_json::to_string(report)?,
        };
        self.write_line(&text)
    }

    fn finish(&mut self, summary: &Summary) -> Result<(), Self::Error> {
        let text = match self.config.format {
            OutputFormat::Text => render_summary(summary),
            OutputFormat::Json => serde_json::to_string(summary)?,
        };
        self.write_line(&text)
    }
}

/// Resolve once a quit request arrives; never, if there is no quit source
/// or it has gone away.
async fn wait_for_quit(quit: &mut Option<mpsc::Receiver<()>>) {
    if let Some(rx) = quit.as_mut() {
        if rx.recv().await.is_some() {
            return;
        }
        *quit = None;
    }
    std::future::pending::<()>().await;
}

/// Watch `input` for a line reading `q` (any case) and signal it.
///
/// Runs on a plain thread: a blocking console read must not hold up runtime
/// shutdown once the session is over.
pub fn spawn_quit_watcher<I>(input: I) -> mpsc::Receiver<()>
where
    I: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);

    thread::spawn(move || {
        for line in input.lines() {
            match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("q") => {
                    let _ = tx.blocking_send(());
                    return;
                },
                Ok(_) => {},
                Err(error) => {
                    debug!(%error, "console input closed");
                    return;
                },
            }
        }
    });

    rx
}

/// Buffered stdin for the quit watcher.
pub fn console_input() -> impl BufRead + Send + 'static {
    io::BufReader::new(io::stdin())
}
