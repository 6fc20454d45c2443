//! Text rendering of reports and summaries.

use std::borrow::Cow;

use prt7_app::{Report, StopReason, Summary};

/// Banner printed when the console starts.
pub const BANNER: &str = "\
==================================================
               PRT-7 FRAME DECODER
==================================================";

const RULE: &str = "------------------------------------------";

/// Printable name of a symbol; the space symbol reads as `Space`.
pub fn display_symbol(symbol: char) -> Cow<'static, str> {
    if symbol == ' ' { Cow::Borrowed("Space") } else { Cow::Owned(symbol.to_string()) }
}

/// One progress line for a report.
pub fn render_report(report: &Report) -> String {
    match report {
        Report::Info { text } => format!("[device] {text}"),
        Report::Decoded { line, input, output, message } => format!(
            "Frame [{line}] -> fragment '{}' decoded as '{}'. Message: [{message}]",
            display_symbol(*input),
            display_symbol(*output),
        ),
        Report::Rotated { line, amount, a_maps_to, message } => format!(
            "Frame [{line}] -> rotating rotor by {amount} (now 'A' maps to '{}'). Message: [{message}]",
            display_symbol(*a_maps_to),
        ),
        Report::Rejected { line, error } => {
            format!("error: could not parse frame [{line}]: {error}")
        },
    }
}

/// Closing block with the assembled message.
pub fn render_summary(summary: &Summary) -> String {
    let ending = match summary.reason {
        StopReason::Closed => "Data stream finished.",
        StopReason::Quit => "Stopped by operator.",
    };
    let stats = summary.stats;

    format!(
        "\n{RULE}\n{ending}\nHIDDEN MESSAGE:\n{}\n\
         frames applied: {}, rejected: {}, info lines: {}",
        summary.message,
        stats.frames_applied(),
        stats.rejected,
        stats.info_lines,
    )
}
