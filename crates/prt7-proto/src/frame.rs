//! Frame type and line parser.
//!
//! # Grammar
//!
//! ```text
//! frame  = load / map
//! load   = "L" "," [ char ]          ; empty payload means space
//! map    = "M" "," [ sign ] *digit   ; stops at the first non-digit
//! sign   = "+" / "-"
//! ```
//!
//! The map payload is deliberately permissive: `M,` and `M,-` both parse as
//! `Map(0)`, and `M,12abc` parses as `Map(12)`. Digit accumulation saturates,
//! so an absurdly long payload parses as `i64::MAX` in magnitude instead of
//! wrapping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ParseError, Result};

/// Tag of a load frame.
pub const LOAD_TAG: char = 'L';

/// Tag of a map (rotate) frame.
pub const MAP_TAG: char = 'M';

/// Separator between tag and payload.
pub const SEPARATOR: char = ',';

/// One protocol unit parsed from a single line.
///
/// The set of frames is closed. Anything that is not a load or a map is a
/// [`ParseError`], never a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Frame {
    /// Decode this ciphertext symbol and append it to the message.
    Load(char),

    /// Rotate the rotor by this signed amount.
    Map(i64),
}

impl fmt::Display for Frame {
    /// Renders the frame in wire form, without a line terminator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(symbol) => write!(f, "{LOAD_TAG}{SEPARATOR}{symbol}"),
            Self::Map(amount) => write!(f, "{MAP_TAG}{SEPARATOR}{amount}"),
        }
    }
}

/// Parse one line into a [`Frame`].
///
/// The line must not carry its terminator; [`crate::LineAssembler`] strips
/// it. Trailing characters after the payload are ignored.
///
/// # Errors
///
/// - [`ParseError::Empty`] / [`ParseError::TooShort`] if the line has no
///   room for a tag and a separator
/// - [`ParseError::MissingSeparator`] if the second character is not `,`
/// - [`ParseError::UnknownTag`] if the tag is neither `L` nor `M`
pub fn parse(line: &str) -> Result<Frame> {
    let mut chars = line.chars();

    let Some(tag) = chars.next() else {
        return Err(ParseError::Empty);
    };
    let Some(separator) = chars.next() else {
        return Err(ParseError::TooShort { len: 1 });
    };
    if separator != SEPARATOR {
        return Err(ParseError::MissingSeparator { found: separator });
    }

    let payload = chars.as_str();
    match tag {
        LOAD_TAG => Ok(Frame::Load(parse_symbol(payload))),
        MAP_TAG => Ok(Frame::Map(parse_rotation(payload))),
        other => Err(ParseError::UnknownTag { tag: other }),
    }
}

/// First payload character, with an empty payload meaning space.
fn parse_symbol(payload: &str) -> char {
    payload.chars().next().unwrap_or(' ')
}

/// Optional sign followed by decimal digits, stopping at the first non-digit.
fn parse_rotation(payload: &str) -> i64 {
    let (negative, digits) = match payload.as_bytes().first() {
        Some(b'-') => (true, &payload[1..]),
        Some(b'+') => (false, &payload[1..]),
        _ => (false, payload),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_takes_first_payload_character() {
        assert_eq!(parse("L,X"), Ok(Frame::Load('X')));
        assert_eq!(parse("L,AB"), Ok(Frame::Load('A')));
        assert_eq!(parse("L,x"), Ok(Frame::Load('x')));
    }

    #[test]
    fn load_empty_or_space_payload_is_space() {
        assert_eq!(parse("L,"), Ok(Frame::Load(' ')));
        assert_eq!(parse("L, "), Ok(Frame::Load(' ')));
    }

    #[test]
    fn load_accepts_symbols_outside_alphabet() {
        assert_eq!(parse("L,3"), Ok(Frame::Load('3')));
        assert_eq!(parse("L,ñ"), Ok(Frame::Load('ñ')));
    }

    #[test]
    fn map_signed_amounts() {
        assert_eq!(parse("M,-5"), Ok(Frame::Map(-5)));
        assert_eq!(parse("M,12"), Ok(Frame::Map(12)));
        assert_eq!(parse("M,+5"), Ok(Frame::Map(5)));
        assert_eq!(parse("M,0"), Ok(Frame::Map(0)));
    }

    #[test]
    fn map_without_digits_is_zero() {
        assert_eq!(parse("M,"), Ok(Frame::Map(0)));
        assert_eq!(parse("M,-"), Ok(Frame::Map(0)));
        assert_eq!(parse("M,+"), Ok(Frame::Map(0)));
        assert_eq!(parse("M,abc"), Ok(Frame::Map(0)));
        assert_eq!(parse("M,+-3"), Ok(Frame::Map(0)));
    }

    #[test]
    fn map_stops_at_first_non_digit() {
        assert_eq!(parse("M,12abc"), Ok(Frame::Map(12)));
        assert_eq!(parse("M,-7 8"), Ok(Frame::Map(-7)));
    }

    #[test]
    fn map_saturates_instead_of_wrapping() {
        assert_eq!(parse("M,99999999999999999999999"), Ok(Frame::Map(i64::MAX)));
        assert_eq!(parse("M,-99999999999999999999999"), Ok(Frame::Map(-i64::MAX)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("L"), Err(ParseError::TooShort { len: 1 }));
        assert_eq!(parse("Z,9"), Err(ParseError::UnknownTag { tag: 'Z' }));
        assert_eq!(parse("Q,1"), Err(ParseError::UnknownTag { tag: 'Q' }));
        assert_eq!(parse("LA"), Err(ParseError::MissingSeparator { found: 'A' }));
        assert_eq!(parse("M;5"), Err(ParseError::MissingSeparator { found: ';' }));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(parse("l,A"), Err(ParseError::UnknownTag { tag: 'l' }));
        assert_eq!(parse("m,1"), Err(ParseError::UnknownTag { tag: 'm' }));
    }

    #[test]
    fn display_is_wire_form() {
        assert_eq!(Frame::Load('A').to_string(), "L,A");
        assert_eq!(Frame::Load(' ').to_string(), "L, ");
        assert_eq!(Frame::Map(-3).to_string(), "M,-3");
        assert_eq!(Frame::Map(7).to_string(), "M,7");
    }
}
