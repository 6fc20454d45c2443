//! Whole sessions replayed through the runtime with a scripted driver.

use prt7_app::{DriverEvent, Report, Runtime, StopReason};
use prt7_harness::{Encoder, ScriptedDriver};

#[tokio::test]
async fn decodes_a_device_byte_stream() {
    let mut encoder = Encoder::new();
    encoder.text("HELLO").rotate(9).text(" WORLD").rotate(-40);
    let mut stream = b"PRT-7 transmitter ready\r\n".to_vec();
    stream.extend(encoder.stream());

    let mut runtime = Runtime::new(ScriptedDriver::from_stream(&stream));
    let summary = runtime.run().await.unwrap();

    assert_eq!(summary.message, "HELLO WORLD");
    assert_eq!(summary.reason, StopReason::Closed);
    assert_eq!(summary.stats.info_lines, 1);
    assert_eq!(summary.stats.rotations, 2);

    let driver = runtime.into_driver();
    assert_eq!(driver.reports()[0], Report::Info { text: "PRT-7 transmitter ready".into() });
    assert_eq!(driver.summary(), Some(&summary));
}

#[tokio::test]
async fn progress_grows_one_symbol_per_load() {
    let mut encoder = Encoder::new();
    encoder.load('O').rotate(3).load('K');

    let mut runtime = Runtime::new(ScriptedDriver::from_lines(encoder.lines()));
    runtime.run().await.unwrap();

    assert_eq!(runtime.driver().progress(), vec!["O", "O", "OK"]);
}

#[tokio::test]
async fn unterminated_last_frame_is_still_decoded() {
    let mut runtime = Runtime::new(ScriptedDriver::from_stream(b"L,O\r\nL,K"));
    let summary = runtime.run().await.unwrap();
    assert_eq!(summary.message, "OK");
}

#[tokio::test]
async fn scrambled_stream_with_quit_keeps_partial_message() {
    let encoder = Encoder::scrambled("SECRET", 42);
    let lines = encoder.lines();
    let loads_before_quit =
        lines.iter().take(lines.len() - 1).filter(|line| line.starts_with('L')).count();

    let mut events: Vec<DriverEvent> =
        lines[..lines.len() - 1].iter().cloned().map(DriverEvent::Line).collect();
    events.push(DriverEvent::Quit);
    events.extend(lines.last().cloned().map(DriverEvent::Line));

    let mut runtime = Runtime::new(ScriptedDriver::new(events));
    let summary = runtime.run().await.unwrap();

    assert_eq!(summary.reason, StopReason::Quit);
    assert_eq!(summary.message, "SECRET"[..loads_before_quit].to_string());
}
