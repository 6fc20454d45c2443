//! `prt7`: decode a hidden message from PRT-7 frames on a serial link.

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};

use clap::{Parser, builder::RangedU64ValueParser};
use prt7_console::{
    ConsoleConfig, ConsoleDriver, ConsoleError, OutputFormat, Runtime, config::MAX_LINE_LEN_LIMIT,
    driver::console_input, port, render::BANNER, spawn_quit_watcher,
};
use prt7_proto::DEFAULT_MAX_LINE_LEN;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prt7", version, about = "Decode PRT-7 rotor frames from a serial link")]
struct Args {
    /// Serial device to read frames from (prompted for if omitted)
    port: Option<PathBuf>,

    /// Read frames from standard input instead of a device
    #[arg(long, conflicts_with = "port")]
    stdin: bool,

    /// Milliseconds to wait for link bytes before polling again
    #[arg(long, default_value_t = 100)]
    idle_poll_ms: u64,

    /// Longest line buffered before a forced break
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN, value_parser = max_line_len_parser())]
    max_line_len: usize,

    /// Hide informational (non-frame) lines from the device
    #[arg(long)]
    quiet_info: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "prt7_app=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn max_line_len_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=MAX_LINE_LEN_LIMIT as u64)
}

impl Args {
    fn config(&self) -> ConsoleConfig {
        ConsoleConfig {
            idle_poll: Duration::from_millis(self.idle_poll_ms.max(1)),
            max_line_len: self.max_line_len,
            show_info: !self.quiet_info,
            format: self.format,
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Status text goes to stdout alongside text reports, and to stderr when
/// stdout carries JSON.
fn status_sink(format: OutputFormat) -> Box<dyn Write> {
    match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    }
}

fn status(out: &mut dyn Write, text: &str) -> Result<(), ConsoleError> {
    writeln!(out, "{text}").and_then(|()| out.flush()).map_err(ConsoleError::Write)
}

async fn run(args: Args) -> Result<(), ConsoleError> {
    let config = args.config();
    let mut out = status_sink(config.format);

    if config.format == OutputFormat::Text {
        status(&mut out, &format!("{BANNER}\n"))?;
    }

    if args.stdin {
        status(&mut out, "Reading frames from standard input...")?;
        let driver = ConsoleDriver::new(tokio::io::stdin(), io::stdout(), config);
        Runtime::new(driver).run().await?;
        return Ok(());
    }

    let path = match args.port {
        Some(path) => path,
        None => port::prompt(&mut io::stdin().lock(), &mut out)?,
    };

    status(&mut out, &format!("\nConnecting to {}...", path.display()))?;
    let link = port::open(&path).await?;
    status(
        &mut out,
        "Waiting for frames...\n\nPress 'Q' + Enter at any time to stop the program.\n",
    )?;

    let quit = spawn_quit_watcher(console_input());
    let driver = ConsoleDriver::new(link, io::stdout(), config).with_quit(quit);
    Runtime::new(driver).run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "decoder stopped");
            let mut stderr = io::stderr();
            let _ = writeln!(stderr, "\nerror: {err}");
            if let Some(hint) = err.hint() {
                let _ = writeln!(stderr, "{hint}");
            }
            ExitCode::FAILURE
        },
    }
}
