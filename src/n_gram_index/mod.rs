use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::{
    alphabet::{Alphabet, Base},
    error::{Error, Result},
    matcher::Matcher,
    search::{SlidingWindow, SubstringSearch},
};

/// Inverted index from fixed-length n-grams to the sequences containing them.
///
/// Built eagerly over a fixed collection and queried read-only afterwards.
/// Keys are literal n-grams of the stored sequences; a sequence appears in
/// the posting list of a key iff that n-gram occurs in it at some offset.
pub struct NGramIndex<'alphabet> {
    matcher: Matcher<'alphabet>,
    n: usize,
    sequences: Vec<String>,
    index: BTreeMap<Vec<u8>, BTreeSet<usize>>,
}

impl<'alphabet> NGramIndex<'alphabet> {
    /// Builds the index. Sequences are deduplicated by content; sequences
    /// shorter than `n` contribute no keys and are only reachable through
    /// the direct fallback scan.
    pub fn new(
        alphabet: &'alphabet Alphabet,
        sequences: impl IntoIterator<Item = impl Into<String>>,
        n: usize,
    ) -> Result<Self> {
        if n == 0 {
            return Err(Error::UnsupportedN(n));
        }

        let matcher = Matcher::new(alphabet);
        let mut result = Self {
            matcher,
            n,
            sequences: Vec::new(),
            index: BTreeMap::new(),
        };

        for sequence in sequences {
            let sequence = sequence.into();
            if result.sequences.contains(&sequence) {
                continue;
            }
            if !matcher.is_valid_sequence(&sequence) {
                warn!("sequence {sequence:?} contains characters outside ACGT");
            }
            result.insert(sequence);
        }

        debug!(
            "built {}-gram index over {} sequences with {} keys",
            result.n,
            result.sequences.len(),
            result.index.len(),
        );
        Ok(result)
    }

    fn insert(&mut self, sequence: String) {
        let id = self.sequences.len();
        for ngram in sequence.as_bytes().windows(self.n) {
            self.index.entry(ngram.to_vec()).or_default().insert(id);
        }
        self.sequences.push(sequence);
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(String::as_str)
    }

    pub fn ngram_keys(&self) -> impl Iterator<Item = &[u8]> {
        self.index.keys().map(Vec::as_slice)
    }

    /// The sequences indexed under the given literal n-gram key.
    pub fn posting_list(&self, ngram: &str) -> BTreeSet<&str> {
        self.index
            .get(ngram.as_bytes())
            .map(|ids| {
                ids.iter()
                    .map(|id| self.sequences[*id].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All indexed sequences the pattern matches somewhere.
    ///
    /// Candidate filtering intersects the posting lists of the pattern's
    /// concrete n-grams; every survivor is then re-verified against the full
    /// pattern, which is what makes the result exact.
    pub fn search(&self, pattern: &str) -> BTreeSet<&str> {
        if pattern.len() < self.n {
            debug!(
                "pattern {pattern:?} is shorter than n = {}, scanning every sequence",
                self.n,
            );
            return self.direct_search(pattern);
        }

        let mut candidates: Option<BTreeSet<usize>> = None;
        for ngram in pattern.as_bytes().windows(self.n) {
            if !ngram.iter().all(|byte| Base::from_ascii(*byte).is_some()) {
                // A degenerate n-gram has no literal key to look up; it does
                // not constrain the candidate set.
                continue;
            }

            candidates = Some(match (candidates, self.index.get(ngram)) {
                (None, Some(postings)) => postings.clone(),
                (Some(current), Some(postings)) => {
                    current.intersection(postings).copied().collect()
                }
                // A concrete n-gram absent from the index rules out every
                // sequence: concrete symbols match nothing but themselves.
                (_, None) => BTreeSet::new(),
            });

            if candidates.as_ref().is_some_and(BTreeSet::is_empty) {
                return BTreeSet::new();
            }
        }

        let Some(candidates) = candidates else {
            // Every n-gram of the pattern is degenerate, so the index cannot
            // narrow anything down.
            debug!(
                "pattern {pattern:?} has no concrete {}-gram, scanning every sequence",
                self.n,
            );
            return self.direct_search(pattern);
        };

        debug!("verifying {} candidates for pattern {pattern:?}", candidates.len());
        let verifier = SlidingWindow::new(self.matcher);
        candidates
            .into_iter()
            .map(|id| self.sequences[id].as_str())
            .filter(|sequence| verifier.exists(sequence, pattern))
            .collect()
    }

    fn direct_search(&self, pattern: &str) -> BTreeSet<&str> {
        let verifier = SlidingWindow::new(self.matcher);
        self.sequences
            .iter()
            .map(String::as_str)
            .filter(|sequence| verifier.exists(sequence, pattern))
            .collect()
    }
}
