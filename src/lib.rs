//! Ambiguity-aware substring search over DNA sequences.
//!
//! Patterns are written in the IUPAC nucleotide code, where a single symbol
//! stands for a set of concrete bases; a pattern matches a window of a
//! sequence iff every sequence base lies in the set of its pattern symbol.
//! Three algorithms share the [`search::SubstringSearch`] contract, an
//! n-gram inverted index ([`n_gram_index::NGramIndex`]) filters candidates
//! over many sequences before exact verification, and
//! [`seed_extend::SeedExtendIndex`] anchors degenerate queries on their
//! concrete runs to report match offsets.

pub mod alphabet;
pub mod error;
pub mod matcher;
pub mod n_gram_index;
pub mod search;
pub mod seed_extend;

pub use alphabet::{Alphabet, Base, BaseSet, Symbol};
pub use error::{Error, Result};
pub use matcher::Matcher;
pub use n_gram_index::NGramIndex;
pub use search::{Naive, PrefixFunctionSearch, SlidingWindow, SubstringSearch};
pub use seed_extend::SeedExtendIndex;
