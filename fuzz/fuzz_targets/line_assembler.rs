//! Feed arbitrary bytes in arbitrary chunks; lines must never be empty and
//! never contain terminators.
#![no_main]

use libfuzzer_sys::fuzz_target;
use prt7_proto::LineAssembler;

fuzz_target!(|input: (u8, Vec<u8>)| {
    let (chunk, bytes) = input;
    let chunk = usize::from(chunk).max(1);
    let mut assembler = LineAssembler::with_max_len(16);

    let mut lines = Vec::new();
    for piece in bytes.chunks(chunk) {
        lines.extend(assembler.push(piece));
    }
    lines.extend(assembler.finish());

    for line in lines {
        assert!(!line.is_empty());
        assert!(!line.contains(['\r', '\n']));
    }
});
