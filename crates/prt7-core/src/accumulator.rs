//! Append-only store of decoded symbols.

use std::fmt;

/// Decoded message in arrival order.
///
/// Symbols are only ever appended. Reads never consume or reorder anything,
/// so [`Accumulator::render`] can be polled after every frame for progressive
/// display and again at the end of the session for the final message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    symbols: Vec<char>,
}

impl Accumulator {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one decoded symbol.
    pub fn append(&mut self, symbol: char) {
        self.symbols.push(symbol);
    }

    /// Every symbol appended so far, in insertion order.
    pub fn render(&self) -> &[char] {
        &self.symbols
    }

    /// The decoded message as a string.
    pub fn message(&self) -> String {
        self.symbols.iter().collect()
    }

    /// Number of symbols appended.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| write!(f, "{symbol}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let acc = Accumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.render(), &[] as &[char]);
        assert_eq!(acc.message(), "");
    }

    #[test]
    fn appends_in_order() {
        let mut acc = Accumulator::new();
        acc.append('H');
        acc.append('I');
        acc.append(' ');
        assert_eq!(acc.render(), &['H', 'I', ' ']);
        assert_eq!(acc.message(), "HI ");
        assert_eq!(acc.to_string(), "HI ");
    }

    #[test]
    fn render_is_repeatable() {
        let mut acc = Accumulator::new();
        acc.append('A');
        acc.append('B');
        assert_eq!(acc.render(), acc.render());
        assert_eq!(acc.len(), 2);
    }
}
