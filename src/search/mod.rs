use crate::matcher::Matcher;

/// Substring existence over an ambiguity-aware pattern.
///
/// `exists` is true iff the pattern matches a contiguous window of the
/// sequence, where each pattern symbol matches per
/// [`Matcher::base_matches_symbol`]. The empty pattern matches every
/// sequence; a pattern longer than the sequence matches none.
pub trait SubstringSearch {
    fn exists(&self, sequence: &str, pattern: &str) -> bool;
}

/// Backtracking two-cursor search, O(n*m).
///
/// Deliberately unoptimised; kept as a cross-validation baseline for the
/// other algorithms.
pub struct Naive<'alphabet> {
    matcher: Matcher<'alphabet>,
}

impl<'alphabet> Naive<'alphabet> {
    pub fn new(matcher: Matcher<'alphabet>) -> Self {
        Self { matcher }
    }
}

impl SubstringSearch for Naive<'_> {
    fn exists(&self, sequence: &str, pattern: &str) -> bool {
        let sequence = sequence.as_bytes();
        let pattern = pattern.as_bytes();

        if pattern.is_empty() {
            return true;
        }
        if sequence.len() < pattern.len() {
            return false;
        }

        let mut i = 0;
        let mut j = 0;
        while i < sequence.len() && j < pattern.len() {
            if self.matcher.base_matches_symbol(sequence[i], pattern[j]) {
                i += 1;
                j += 1;
            } else {
                // Rewind the sequence cursor past the failed start offset.
                i = i - j + 1;
                j = 0;
            }
        }

        j == pattern.len()
    }
}

/// Prefix-function (KMP-style) search, O(n+m).
///
/// The failure table is built over the pattern alone, deciding self-overlap
/// with [`Matcher::symbols_compatible`]. That relation is not transitive, so
/// for degenerate patterns the table can be too aggressive and this search
/// may report a match the window-based algorithms reject (see the
/// `prefix_function_search_diverges_on_degenerate_overlap` test). For
/// patterns of concrete bases compatibility coincides with equality and all
/// three algorithms agree.
pub struct PrefixFunctionSearch<'alphabet> {
    matcher: Matcher<'alphabet>,
}

impl<'alphabet> PrefixFunctionSearch<'alphabet> {
    pub fn new(matcher: Matcher<'alphabet>) -> Self {
        Self { matcher }
    }

    /// For each pattern position, the length of the longest proper prefix of
    /// the pattern that is compatible with the suffix ending there.
    fn prefix_function(&self, pattern: &[u8]) -> Vec<usize> {
        let mut table = vec![0; pattern.len()];
        let mut length = 0;
        let mut i = 1;

        while i < pattern.len() {
            if self.matcher.symbols_compatible(pattern[i], pattern[length]) {
                length += 1;
                table[i] = length;
                i += 1;
            } else if length != 0 {
                length = table[length - 1];
            } else {
                table[i] = 0;
                i += 1;
            }
        }

        table
    }
}

impl SubstringSearch for PrefixFunctionSearch<'_> {
    fn exists(&self, sequence: &str, pattern: &str) -> bool {
        let sequence = sequence.as_bytes();
        let pattern = pattern.as_bytes();

        if pattern.is_empty() {
            return true;
        }
        if sequence.len() < pattern.len() {
            return false;
        }

        let table = self.prefix_function(pattern);

        let mut i = 0;
        let mut j = 0;
        while i < sequence.len() {
            if self.matcher.base_matches_symbol(sequence[i], pattern[j]) {
                i += 1;
                j += 1;
                if j == pattern.len() {
                    return true;
                }
            } else if j != 0 {
                // Fall back within the pattern; the sequence cursor never rewinds.
                j = table[j - 1];
            } else {
                i += 1;
            }
        }

        false
    }
}

/// Window-at-every-offset search with early exit, O(n*m) worst case.
///
/// The reference implementation: it evaluates the match definition literally
/// and is what the n-gram index uses for candidate verification.
pub struct SlidingWindow<'alphabet> {
    matcher: Matcher<'alphabet>,
}

impl<'alphabet> SlidingWindow<'alphabet> {
    pub fn new(matcher: Matcher<'alphabet>) -> Self {
        Self { matcher }
    }
}

impl SubstringSearch for SlidingWindow<'_> {
    fn exists(&self, sequence: &str, pattern: &str) -> bool {
        let sequence = sequence.as_bytes();
        let pattern = pattern.as_bytes();

        if pattern.is_empty() {
            return true;
        }
        if sequence.len() < pattern.len() {
            return false;
        }

        sequence.windows(pattern.len()).any(|window| {
            window
                .iter()
                .zip(pattern)
                .all(|(base, symbol)| self.matcher.base_matches_symbol(*base, *symbol))
        })
    }
}
