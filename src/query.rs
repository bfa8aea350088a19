//! Set-algebra queries over the token index, and the stub-matching pair
//! query layered on top of them.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::catalog::Record;
use crate::error::{Error, Result};
use crate::index::{Index, TokenKey};

/// Marker substituted for the left label while deriving a pair stub. Names
/// contain only letters, digits, spaces and hyphens, so it cannot collide.
const WILDCARD: &str = "*";

/// Group queries over a built index.
#[derive(Clone, Copy)]
pub struct Groups<'a> {
    index: &'a Index,
}

impl<'a> Groups<'a> {
    pub fn new(index: &'a Index) -> Groups<'a> {
        Groups { index }
    }

    /// Queries over the shared process-wide index.
    pub fn shared() -> Groups<'static> {
        Groups::new(Index::ensure_built())
    }

    /// Whether a token survived pruning.
    pub fn known(&self, token: &str) -> bool {
        self.index.postings(token).is_some()
    }

    fn postings(&self, token: &str) -> Result<&'a HashSet<TokenKey>> {
        self.index
            .postings(token)
            .ok_or_else(|| Error::UnknownToken(token.to_owned()))
    }

    /// Every record whose token sequence contains `token`.
    pub fn records(&self, token: &str) -> Result<impl Iterator<Item = &'a Record> + use<'a>> {
        let index = self.index;
        Ok(self.postings(token)?.iter().filter_map(move |k| index.record(k)))
    }

    /// The intersection of the posting sets of `include`, minus the union of
    /// the posting sets of `exclude`. Order is unspecified.
    pub fn group<I, E>(&self, include: &[I], exclude: &[E]) -> Result<Vec<&'a Record>>
    where
        I: AsRef<str>,
        E: AsRef<str>,
    {
        if include.is_empty() {
            return Err(Error::Invalid(
                "group requires at least one include token".into(),
            ));
        }
        let mut sets = Vec::with_capacity(include.len());
        for token in include {
            sets.push(self.postings(token.as_ref())?);
        }
        let mut keys: HashSet<&TokenKey> = sets[0].iter().collect();
        for set in &sets[1..] {
            keys.retain(|k| set.contains(*k));
        }
        for token in exclude {
            let set = self.postings(token.as_ref())?;
            keys.retain(|k| !set.contains(*k));
        }
        Ok(keys.into_iter().filter_map(|k| self.index.record(k)).collect())
    }

    /// Every surviving token with its records, ordered by token text.
    pub fn all_groups(&self) -> Vec<(&'a str, Vec<&'a Record>)> {
        let mut out: Vec<(&str, Vec<&Record>)> = self
            .index
            .iter_postings()
            .map(|(token, keys)| {
                (
                    token,
                    keys.iter().filter_map(|k| self.index.record(k)).collect(),
                )
            })
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// Every surviving token with its posting count, largest groups first,
    /// ties by token text.
    pub fn ranked(&self) -> Vec<(&'a str, usize)> {
        let mut out: Vec<(&str, usize)> = self
            .index
            .iter_postings()
            .map(|(token, keys)| (token, keys.len()))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        out
    }
}

/// One matched pair: the shared stub name and the two counterpart records.
#[derive(Debug, Clone)]
pub struct Pair<'a> {
    pub name: String,
    pub left: &'a Record,
    pub right: &'a Record,
}

/// Best-effort contrastive pairing of records whose names differ only in a
/// left/right-style label. Entries missing either side drop silently.
pub struct Pairs<'a> {
    left: String,
    right: String,
    vals: HashMap<String, &'a Record>,
}

impl<'a> Pairs<'a> {
    /// Build the working set: records whose tokens contain the left or right
    /// label, filtered by the construction-time include/exclude labels.
    pub fn new(
        groups: &Groups<'a>,
        left: &str,
        right: &str,
        include: &[String],
        exclude: &[String],
    ) -> Result<Pairs<'a>> {
        let mut vals = HashMap::new();
        for label in [left, right] {
            for rec in groups.records(label)? {
                if exclude.iter().any(|t| rec.tokens.contains(t)) {
                    continue;
                }
                if !include.is_empty() && !include.iter().any(|t| rec.tokens.contains(t)) {
                    continue;
                }
                vals.insert(rec.name.clone(), rec);
            }
        }
        Ok(Pairs {
            left: left.to_owned(),
            right: right.to_owned(),
            vals,
        })
    }

    /// Run the stub match. `include` tokens must all be present in the
    /// combined token sequences of a candidate pair; `exclude` tokens must
    /// all be absent. Results are ordered by `(left glyph, right glyph)`.
    pub fn pairs(&self, include: &[String], exclude: &[String]) -> Vec<Pair<'a>> {
        let mut out = Vec::new();
        for name in self.vals.keys() {
            if !name.contains(&self.left) {
                continue;
            }
            let stub = name.replacen(&self.left, WILDCARD, 1);
            let left_key = stub.replace(WILDCARD, &self.left);
            let right_key = stub.replace(WILDCARD, &self.right);
            let (Some(&left), Some(&right)) =
                (self.vals.get(&left_key), self.vals.get(&right_key))
            else {
                continue;
            };
            let combined =
                |t: &String| left.tokens.contains(t) || right.tokens.contains(t);
            if exclude.iter().any(combined) {
                continue;
            }
            if !include.is_empty() && !include.iter().all(combined) {
                continue;
            }
            out.push(Pair {
                name: strip_stub(&stub),
                left,
                right,
            });
        }
        out.sort_by(|a, b| {
            a.left
                .chr
                .cmp(&b.left.chr)
                .then_with(|| a.right.chr.cmp(&b.right.chr))
        });
        out
    }
}

/// The stub with the wildcard and its surrounding separators stripped.
fn strip_stub(stub: &str) -> String {
    stub.replace(WILDCARD, "")
        .split_whitespace()
        .map(|w| w.trim_matches('-'))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A curated, named left/right-style pairing preset.
pub struct PairSet {
    /// Short display tag, e.g. `("horz", "vert")`.
    pub tag: (&'static str, &'static str),
    pub left: &'static str,
    pub right: &'static str,
    pub exclude: &'static [&'static str],
}

impl PairSet {
    /// The selector name used on the command line, e.g. `horz_vert`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.tag.0, self.tag.1)
    }
}

pub const PAIR_SETS: &[PairSet] = &[
    PairSet {
        tag: ("left", "right"),
        left: "left",
        right: "right",
        exclude: &[],
    },
    PairSet {
        tag: ("top", "bottom"),
        left: "top",
        right: "bottom",
        exclude: &[],
    },
    PairSet {
        tag: ("horz", "vert"),
        left: "horizontal",
        right: "vertical",
        exclude: &[],
    },
    PairSet {
        tag: ("upper", "lower"),
        left: "upper",
        right: "lower",
        exclude: &[],
    },
];

/// Look up a pairing preset by selector name.
pub fn pair_set(name: &str) -> Result<&'static PairSet> {
    PAIR_SETS
        .iter()
        .find(|p| p.name() == name)
        .ok_or_else(|| Error::Invalid(format!("unknown pair set: {name}")))
}
