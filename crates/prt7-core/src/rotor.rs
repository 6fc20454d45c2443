//! Rotating substitution cipher.
//!
//! The rotor is a ring of 27 symbols in canonical order `A..=Z` followed by
//! space. Its only state is the offset of the logical zero position on that
//! ring. Rotating is an O(1) modular update; the ring itself never changes.
//!
//! ```text
//! offset 0:  A B C ... Y Z _        map('A') = 'A'
//! offset 1:  B C D ... Z _ A        map('A') = 'B', map('Z') = ' '
//! ```

/// Number of symbols on the ring.
pub const RING_SIZE: usize = 27;

/// The space symbol, last on the ring.
pub const SPACE: char = ' ';

/// Canonical ring order.
pub const ALPHABET: [char; RING_SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', SPACE,
];

/// Canonical index of a symbol in the unrotated alphabet.
///
/// Letters are matched case-insensitively. Returns `None` for anything that
/// is not on the ring.
pub fn index_of(symbol: char) -> Option<usize> {
    match symbol.to_ascii_uppercase() {
        upper @ 'A'..='Z' => Some(upper as usize - 'A' as usize),
        SPACE => Some(RING_SIZE - 1),
        _ => None,
    }
}

/// Reduce a signed step count to a forward step on the ring.
fn reduce(steps: i64) -> usize {
    steps.rem_euclid(RING_SIZE as i64) as usize
}

/// Cipher wheel with a mutable zero offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotor {
    /// Always in `0..RING_SIZE`
    offset: usize,
}

impl Rotor {
    /// Unrotated rotor (offset 0, identity mapping on the ring).
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotor already turned by `steps`.
    pub fn with_offset(steps: i64) -> Self {
        Self { offset: reduce(steps) }
    }

    /// Current offset, in `0..RING_SIZE`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Turn the rotor by `steps`; positive moves the zero position forward.
    ///
    /// Rotation is additive modulo the ring size: `rotate(a); rotate(b)`
    /// equals `rotate(a + b)` for any magnitudes, including ones whose sum
    /// would overflow.
    pub fn rotate(&mut self, steps: i64) {
        self.offset = (self.offset + reduce(steps)) % RING_SIZE;
    }

    /// Encipher one symbol under the current offset.
    ///
    /// The symbol's canonical index is counted forward from the current zero
    /// position. Symbols outside the ring come back unchanged.
    pub fn map(&self, symbol: char) -> char {
        match index_of(symbol) {
            Some(index) => ALPHABET[(self.offset + index) % RING_SIZE],
            None => symbol,
        }
    }

    /// Inverse of [`Rotor::map`] for symbols on the ring.
    ///
    /// `unmap(map(c)) == c.to_ascii_uppercase()` for every ring symbol.
    pub fn unmap(&self, symbol: char) -> char {
        match index_of(symbol) {
            Some(index) => ALPHABET[(index + RING_SIZE - self.offset) % RING_SIZE],
            None => symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_indices() {
        assert_eq!(index_of('A'), Some(0));
        assert_eq!(index_of('z'), Some(25));
        assert_eq!(index_of(' '), Some(26));
        assert_eq!(index_of('3'), None);
        assert_eq!(index_of('é'), None);
    }

    #[test]
    fn unrotated_rotor_is_identity_on_ring() {
        let rotor = Rotor::new();
        for symbol in ALPHABET {
            assert_eq!(rotor.map(symbol), symbol);
        }
    }

    #[test]
    fn map_is_case_insensitive() {
        let rotor = Rotor::with_offset(2);
        assert_eq!(rotor.map('a'), 'C');
        assert_eq!(rotor.map('A'), 'C');
    }

    #[test]
    fn rotation_wraps_through_space() {
        let mut rotor = Rotor::new();
        rotor.rotate(1);
        assert_eq!(rotor.map('A'), 'B');
        assert_eq!(rotor.map('Z'), ' ');
        assert_eq!(rotor.map(' '), 'A');
    }

    #[test]
    fn negative_rotation_moves_backward() {
        let mut rotor = Rotor::new();
        rotor.rotate(-1);
        assert_eq!(rotor.offset(), 26);
        assert_eq!(rotor.map('A'), ' ');
        assert_eq!(rotor.map('B'), 'A');
    }

    #[test]
    fn full_turn_is_identity() {
        let mut rotor = Rotor::new();
        rotor.rotate(27);
        assert_eq!(rotor.offset(), 0);
        rotor.rotate(-54);
        assert_eq!(rotor.offset(), 0);
    }

    #[test]
    fn huge_rotations_reduce_without_overflow() {
        let mut rotor = Rotor::new();
        rotor.rotate(i64::MAX);
        rotor.rotate(i64::MAX);
        rotor.rotate(i64::MIN);
        assert_eq!(rotor, Rotor::with_offset(i64::MAX % 27 * 2 + i64::MIN % 27));
    }

    #[test]
    fn symbols_off_the_ring_pass_through() {
        let rotor = Rotor::with_offset(5);
        for symbol in ['0', '9', ',', '\n', 'ñ', '-'] {
            assert_eq!(rotor.map(symbol), symbol);
            assert_eq!(rotor.unmap(symbol), symbol);
        }
    }

    #[test]
    fn unmap_inverts_map() {
        let rotor = Rotor::with_offset(11);
        for symbol in ALPHABET {
            assert_eq!(rotor.unmap(rotor.map(symbol)), symbol);
        }
    }
}
