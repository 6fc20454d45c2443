//! Parse arbitrary lines; any frame that parses must re-render to itself and
//! apply without panicking.
#![no_main]

use libfuzzer_sys::fuzz_target;
use prt7_core::Engine;
use prt7_proto::parse;

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);
    let mut engine = Engine::new();

    for line in line.split(['\r', '\n']) {
        let Ok(frame) = parse(line) else { continue };
        assert_eq!(parse(&frame.to_string()), Ok(frame));
        engine.apply(frame);
    }
});
