use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::{
    alphabet::{Alphabet, Base},
    error::{Error, Result},
    matcher::Matcher,
};

/// A maximal run of concrete bases inside a query, used as an exact-match
/// anchor for extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed<'query> {
    pub bases: &'query [u8],
    pub offset: usize,
}

/// Seed-and-extend search over named sequences.
///
/// Degenerate symbols cannot be anchored in an exact-match index, so the
/// query's concrete runs act as seeds: each seed hit pins down the single
/// offset where the whole query would have to sit, and extension checks the
/// full window there. Unlike [`NGramIndex`], this engine reports match
/// offsets, not just containment.
///
/// [`NGramIndex`]: crate::n_gram_index::NGramIndex
pub struct SeedExtendIndex<'alphabet> {
    matcher: Matcher<'alphabet>,
    min_seed_length: usize,
    sequences: Vec<(String, String)>,
    seed_index: BTreeMap<Vec<u8>, Vec<(usize, usize)>>,
}

impl<'alphabet> SeedExtendIndex<'alphabet> {
    pub fn new(alphabet: &'alphabet Alphabet, min_seed_length: usize) -> Result<Self> {
        if min_seed_length == 0 {
            return Err(Error::UnsupportedN(min_seed_length));
        }

        Ok(Self {
            matcher: Matcher::new(alphabet),
            min_seed_length,
            sequences: Vec::new(),
            seed_index: BTreeMap::new(),
        })
    }

    /// Adds a sequence under a unique id and indexes every
    /// `min_seed_length`-gram of it with its position.
    pub fn add_sequence(&mut self, id: impl Into<String>, sequence: impl Into<String>) {
        let id = id.into();
        if self.sequences.iter().any(|(existing, _)| *existing == id) {
            warn!("sequence id {id:?} is already indexed, ignoring");
            return;
        }

        let sequence = sequence.into();
        let index = self.sequences.len();
        for (position, seed) in sequence.as_bytes().windows(self.min_seed_length).enumerate() {
            self.seed_index
                .entry(seed.to_vec())
                .or_default()
                .push((index, position));
        }
        self.sequences.push((id, sequence));
    }

    /// The maximal runs of concrete bases in the query that are long enough
    /// to serve as anchors.
    pub fn extract_seeds<'query>(&self, query: &'query str) -> Vec<Seed<'query>> {
        let query = query.as_bytes();
        let mut seeds = Vec::new();
        let mut start = None;

        for (position, byte) in query.iter().enumerate() {
            if Base::from_ascii(*byte).is_some() {
                start.get_or_insert(position);
            } else if let Some(run_start) = start.take() {
                if position - run_start >= self.min_seed_length {
                    seeds.push(Seed {
                        bases: &query[run_start..position],
                        offset: run_start,
                    });
                }
            }
        }
        if let Some(run_start) = start {
            if query.len() - run_start >= self.min_seed_length {
                seeds.push(Seed {
                    bases: &query[run_start..],
                    offset: run_start,
                });
            }
        }

        seeds
    }

    /// Match offsets of the query per sequence id. Sequences without a match
    /// are absent from the result.
    pub fn search(&self, query: &str) -> BTreeMap<&str, Vec<usize>> {
        let seeds = self.extract_seeds(query);
        if seeds.is_empty() {
            // Nothing to anchor on, check every offset of every sequence.
            debug!("query {query:?} contains no seed, scanning every position");
            return self.search_without_seeds(query);
        }

        // Each seed hit determines where the full query would start. Seeds
        // longer than the indexed length anchor on their prefix; extension
        // re-checks the rest of the run anyway.
        let mut anchors: BTreeSet<(usize, usize)> = BTreeSet::new();
        for seed in &seeds {
            let Some(hits) = self.seed_index.get(&seed.bases[..self.min_seed_length]) else {
                continue;
            };
            for (index, position) in hits {
                if *position >= seed.offset {
                    anchors.insert((*index, position - seed.offset));
                }
            }
        }
        debug!(
            "query {query:?} produced {} seeds and {} anchors",
            seeds.len(),
            anchors.len(),
        );

        let mut results: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (index, query_start) in anchors {
            let (id, sequence) = &self.sequences[index];
            if self.extends_to_full_match(sequence, query, query_start) {
                results.entry(id).or_default().push(query_start);
            }
        }

        results
    }

    fn extends_to_full_match(&self, sequence: &str, query: &str, query_start: usize) -> bool {
        let sequence = sequence.as_bytes();
        let query = query.as_bytes();

        if query_start + query.len() > sequence.len() {
            return false;
        }

        query.iter().enumerate().all(|(position, symbol)| {
            self.matcher
                .base_matches_symbol(sequence[query_start + position], *symbol)
        })
    }

    fn search_without_seeds(&self, query: &str) -> BTreeMap<&str, Vec<usize>> {
        let mut results: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

        for (id, sequence) in &self.sequences {
            if sequence.len() < query.len() {
                continue;
            }
            for query_start in 0..=sequence.len() - query.len() {
                if self.extends_to_full_match(sequence, query, query_start) {
                    results.entry(id).or_default().push(query_start);
                }
            }
        }

        results
    }
}
