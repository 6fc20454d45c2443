//! Property tests for the line grammar.
//!
//! The parser is a pure function of its input, so every property here is
//! checked over arbitrary strings rather than hand-picked lines.

use prt7_proto::{Frame, LineAssembler, ParseError, parse};
use proptest::prelude::*;

proptest! {
    /// Any string either parses or yields a discriminated failure.
    #[test]
    fn parse_is_total(line in ".*") {
        let _ = parse(&line);
    }

    /// A parsed frame renders back to a line that parses to the same frame.
    #[test]
    fn parsed_frames_rerender_to_themselves(line in "[LM],.{0,12}") {
        let frame = parse(&line).unwrap();
        prop_assert_eq!(parse(&frame.to_string()), Ok(frame));
    }

    #[test]
    fn map_roundtrips_any_amount(amount in any::<i64>().prop_filter("MIN has no positive twin", |n| *n != i64::MIN)) {
        prop_assert_eq!(parse(&Frame::Map(amount).to_string()), Ok(Frame::Map(amount)));
    }

    #[test]
    fn load_keeps_first_payload_char(symbol in any::<char>(), rest in ".{0,4}") {
        let line = format!("L,{symbol}{rest}");
        prop_assert_eq!(parse(&line), Ok(Frame::Load(symbol)));
    }

    #[test]
    fn unknown_tags_are_rejected(tag in any::<char>().prop_filter("frame tag", |c| *c != 'L' && *c != 'M'), rest in ".{0,8}") {
        let line = format!("{tag},{rest}");
        prop_assert_eq!(parse(&line), Err(ParseError::UnknownTag { tag }));
    }

    /// Splitting the byte stream at arbitrary points never changes the lines.
    #[test]
    fn assembler_is_split_invariant(
        lines in prop::collection::vec("[A-Z ,+\\-0-9]{1,10}", 0..20),
        cut in any::<prop::sample::Index>(),
    ) {
        let stream = lines.iter().map(|l| format!("{l}\r\n")).collect::<String>();
        let bytes = stream.as_bytes();
        let at = cut.index(bytes.len() + 1);

        let mut whole = LineAssembler::new();
        let expected = whole.push(bytes);

        let mut split = LineAssembler::new();
        let mut got = split.push(&bytes[..at]);
        got.extend(split.push(&bytes[at..]));

        prop_assert_eq!(&got, &expected);
        prop_assert_eq!(got, lines);
    }
}
