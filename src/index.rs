//! The classification engine: a deduplicated record cache keyed by each
//! record's token-tuple, plus an inverted index from token to the set of
//! token-tuples containing it, pruned of low-value tokens.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use std::time::Instant;

use tracing::info;

use crate::catalog::{self, Record};

/// A record's identity: its ordered token sequence.
pub type TokenKey = Vec<String>;

/// Tokens whose posting set is smaller than this are pruned. They are
/// near-unique noise that would dominate groupings.
const MIN_POSTINGS: usize = 3;

pub struct Index {
    records: HashMap<TokenKey, Record>,
    postings: HashMap<String, HashSet<TokenKey>>,
}

static SHARED: OnceLock<Index> = OnceLock::new();

impl Index {
    /// The process-wide index over the full catalog. The first call builds
    /// it; every later call returns the same instance. The build is not
    /// cheap — embedding applications should trigger it during startup.
    pub fn ensure_built() -> &'static Index {
        SHARED.get_or_init(|| Index::build(catalog::records()))
    }

    /// Build an index from any record source. Records with identical token
    /// sequences collapse to one entry, last write wins.
    pub fn build(source: impl IntoIterator<Item = Record>) -> Index {
        let start = Instant::now();
        let mut records: HashMap<TokenKey, Record> = HashMap::new();
        for rec in source {
            records.insert(rec.tokens.clone(), rec);
        }
        let mut postings: HashMap<String, HashSet<TokenKey>> = HashMap::new();
        for key in records.keys() {
            for token in key {
                postings
                    .entry(token.clone())
                    .or_default()
                    .insert(key.clone());
            }
        }
        // Prune bare ordinal labels and tokens too rare to group anything.
        postings.retain(|token, keys| token.parse::<i64>().is_err() && keys.len() >= MIN_POSTINGS);
        info!(
            records = records.len(),
            tokens = postings.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "index built"
        );
        Index { records, postings }
    }

    /// The record identified by a token-tuple.
    pub fn record(&self, key: &[String]) -> Option<&Record> {
        self.records.get(key)
    }

    /// The posting set for a token, if it survived pruning.
    pub fn postings(&self, token: &str) -> Option<&HashSet<TokenKey>> {
        self.postings.get(token)
    }

    /// All surviving tokens with their posting sets, unordered.
    pub fn iter_postings(&self) -> impl Iterator<Item = (&str, &HashSet<TokenKey>)> {
        self.postings.iter().map(|(t, k)| (t.as_str(), k))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(cp: u32, name: &str) -> Record {
        Record::new(cp, char::from_u32(cp).unwrap(), name)
    }

    fn small() -> Index {
        Index::build(vec![
            rec(0x61, "latin letter a"),
            rec(0x62, "latin letter b"),
            rec(0x63, "latin letter c"),
            rec(0x31, "digit 1"),
            rec(0x32, "digit 2"),
            rec(0x33, "digit 3"),
        ])
    }

    #[test]
    fn pruning_invariant() {
        let idx = small();
        for (token, keys) in idx.iter_postings() {
            assert!(keys.len() >= MIN_POSTINGS, "token {token} too rare");
            assert!(token.parse::<i64>().is_err(), "token {token} is numeric");
        }
        // "latin" and "letter" survive (3 postings); "a" and "1" do not.
        assert!(idx.postings("latin").is_some());
        assert!(idx.postings("letter").is_some());
        assert!(idx.postings("digit").is_some());
        assert!(idx.postings("a").is_none());
        assert!(idx.postings("1").is_none());
    }

    #[test]
    fn duplicate_token_sequences_collapse() {
        let idx = Index::build(vec![rec(0x61, "same name"), rec(0x62, "same name")]);
        assert_eq!(idx.len(), 1);
        // Last write wins.
        let key = catalog::tokenize("same name");
        assert_eq!(idx.record(&key).unwrap().int, 0x62);
    }

    #[test]
    fn record_lookup_by_key() {
        let idx = small();
        let key = catalog::tokenize("latin letter b");
        assert_eq!(idx.record(&key).unwrap().chr, "b");
        assert!(idx.record(&catalog::tokenize("no such")).is_none());
    }
}
