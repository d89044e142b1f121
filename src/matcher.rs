use crate::alphabet::{Alphabet, Base};

/// Ambiguity-aware character matching against the IUPAC code table.
///
/// Invalid input never raises an error at this layer: a character outside the
/// alphabet simply matches nothing, so malformed sequences and patterns
/// degrade to "no match".
#[derive(Clone, Copy)]
pub struct Matcher<'alphabet> {
    alphabet: &'alphabet Alphabet,
}

impl<'alphabet> Matcher<'alphabet> {
    pub fn new(alphabet: &'alphabet Alphabet) -> Self {
        Self { alphabet }
    }

    /// True iff `base` is a concrete base and the pattern symbol allows it.
    pub fn base_matches_symbol(&self, base: u8, symbol: u8) -> bool {
        let Some(base) = Base::from_ascii(base) else {
            return false;
        };
        self.alphabet
            .allowed_bases(symbol)
            .is_some_and(|allowed| allowed.contains(base))
    }

    /// True iff two pattern symbols could match a common base.
    ///
    /// This relation is reflexive and symmetric, but not transitive: R and Y
    /// each overlap N without overlapping each other. Prefix-function
    /// construction uses it in place of character equality, which is exactly
    /// where the search in [`PrefixFunctionSearch`] inherits its documented
    /// divergence on degenerate patterns.
    ///
    /// [`PrefixFunctionSearch`]: crate::search::PrefixFunctionSearch
    pub fn symbols_compatible(&self, first: u8, second: u8) -> bool {
        match (
            self.alphabet.allowed_bases(first),
            self.alphabet.allowed_bases(second),
        ) {
            (Some(first), Some(second)) => first.intersects(second),
            _ => false,
        }
    }

    /// True iff every character of the sequence is a concrete base.
    pub fn is_valid_sequence(&self, sequence: &str) -> bool {
        sequence.bytes().all(|byte| Base::from_ascii(byte).is_some())
    }

    /// True iff every character of the pattern is a recognised IUPAC code.
    pub fn is_valid_pattern(&self, pattern: &str) -> bool {
        pattern
            .bytes()
            .all(|byte| self.alphabet.allowed_bases(byte).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_bases_match_only_themselves() {
        let alphabet = Alphabet::new();
        let matcher = Matcher::new(&alphabet);

        assert!(matcher.base_matches_symbol(b'A', b'A'));
        assert!(!matcher.base_matches_symbol(b'A', b'C'));
        assert!(!matcher.base_matches_symbol(b'G', b'T'));
    }

    #[test]
    fn degenerate_symbols_match_their_base_sets() {
        let alphabet = Alphabet::new();
        let matcher = Matcher::new(&alphabet);

        // R = A|G
        assert!(matcher.base_matches_symbol(b'A', b'R'));
        assert!(matcher.base_matches_symbol(b'G', b'R'));
        assert!(!matcher.base_matches_symbol(b'C', b'R'));
        assert!(!matcher.base_matches_symbol(b'T', b'R'));

        // N = any base
        for base in b"ACGT" {
            assert!(matcher.base_matches_symbol(*base, b'N'));
        }
    }

    #[test]
    fn invalid_input_never_matches() {
        let alphabet = Alphabet::new();
        let matcher = Matcher::new(&alphabet);

        // N allows every base, but 'X' and 'U' are not bases.
        assert!(!matcher.base_matches_symbol(b'X', b'N'));
        assert!(!matcher.base_matches_symbol(b'U', b'N'));
        // 'Z' is not a symbol.
        assert!(!matcher.base_matches_symbol(b'A', b'Z'));
        // Symbols are not bases: R may not appear in a sequence.
        assert!(!matcher.base_matches_symbol(b'R', b'R'));
    }

    #[test]
    fn compatibility_is_reflexive_and_symmetric() {
        let alphabet = Alphabet::new();
        let matcher = Matcher::new(&alphabet);

        for first in b"ACGTRYMKWSBDHVN" {
            assert!(matcher.symbols_compatible(*first, *first));
            for second in b"ACGTRYMKWSBDHVN" {
                assert_eq!(
                    matcher.symbols_compatible(*first, *second),
                    matcher.symbols_compatible(*second, *first),
                );
            }
        }
    }

    #[test]
    fn compatibility_is_not_transitive() {
        let alphabet = Alphabet::new();
        let matcher = Matcher::new(&alphabet);

        // R and Y each overlap N, yet R = {A,G} and Y = {C,T} are disjoint.
        assert!(matcher.symbols_compatible(b'R', b'N'));
        assert!(matcher.symbols_compatible(b'N', b'Y'));
        assert!(!matcher.symbols_compatible(b'R', b'Y'));
    }

    #[test]
    fn compatibility_rejects_unrecognised_symbols() {
        let alphabet = Alphabet::new();
        let matcher = Matcher::new(&alphabet);

        assert!(!matcher.symbols_compatible(b'N', b'X'));
        assert!(!matcher.symbols_compatible(b'X', b'X'));
    }

    #[test]
    fn sequence_and_pattern_validity() {
        let alphabet = Alphabet::new();
        let matcher = Matcher::new(&alphabet);

        assert!(matcher.is_valid_sequence("GATTACA"));
        assert!(matcher.is_valid_sequence(""));
        // Degenerate codes are pattern symbols, not sequence bases.
        assert!(!matcher.is_valid_sequence("GATTR"));
        assert!(!matcher.is_valid_sequence("gatt"));

        assert!(matcher.is_valid_pattern("GATTR"));
        assert!(matcher.is_valid_pattern("NNNN"));
        assert!(matcher.is_valid_pattern(""));
        assert!(!matcher.is_valid_pattern("GATTX"));
    }
}
