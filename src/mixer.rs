//! The letter mixer: per-character look-alike glyph candidates drawn from a
//! curated allow-list of token groups, used to respell words.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::catalog::Record;
use crate::error::Error;
use crate::query::Groups;

/// Variant groups that render unreliably or are visually misleading.
const DENY: &[&str] = &[
    "tag",
    "fullwidth",
    "combining",
    "squared",
    "circled",
    "parenthesized",
];

/// Scripts with letter forms close enough to pass for latin.
const LETTER_GROUPS: &[&str] = &[
    "latin", "cyrillic", "carian", "osage", "lydian", "old", "cherokee", "rejang", "lisu",
    "modifier",
];

const DIGIT_GROUPS: &[&str] = &["mathematical", "latin", "digit", "number"];

fn digit_name(c: char) -> Option<&'static str> {
    match c {
        '0' => Some("zero"),
        '1' => Some("one"),
        '2' => Some("two"),
        '3' => Some("three"),
        '4' => Some("four"),
        '5' => Some("five"),
        '6' => Some("six"),
        '7' => Some("seven"),
        '8' => Some("eight"),
        '9' => Some("nine"),
        _ => None,
    }
}

pub struct LetterMixer<'a> {
    candidates: HashMap<char, Vec<String>>,
    records: HashMap<char, Vec<&'a Record>>,
}

impl<'a> LetterMixer<'a> {
    /// Precompute candidate lists for `a`-`z` and `0`-`9`. Allow-list groups
    /// whose tokens are absent from the index contribute nothing.
    pub fn new(groups: &Groups<'a>) -> LetterMixer<'a> {
        let mut candidates = HashMap::new();
        let mut records = HashMap::new();
        for ch in ('a'..='z').chain('0'..='9') {
            let recs = variants(groups, ch);
            let mut chars: Vec<String> = recs.iter().map(|r| r.chr.clone()).collect();
            chars.sort_unstable();
            chars.dedup();
            candidates.insert(ch, chars);
            records.insert(ch, recs);
        }
        LetterMixer {
            candidates,
            records,
        }
    }

    /// The sorted candidate glyphs for a character; empty when the catalog
    /// offers no variants.
    pub fn candidates(&self, c: char) -> &[String] {
        self.candidates.get(&c).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The raw records behind a character's candidates.
    pub fn records(&self, c: char) -> &[&'a Record] {
        self.records.get(&c).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The record whose glyph is `glyph`, among the variants of `c`.
    pub fn record_for(&self, c: char, glyph: &str) -> Option<&'a Record> {
        self.records(c).iter().copied().find(|r| r.chr == glyph)
    }

    /// Respell `word` by sampling one candidate per character, uniformly,
    /// with a fresh rng per call. Characters without candidates pass through
    /// unchanged.
    pub fn mix_word(&self, word: &str) -> String {
        let mut rng = rand::rng();
        word.chars()
            .map(|c| {
                let arr = self.candidates(c.to_ascii_lowercase());
                if arr.is_empty() {
                    c.to_string()
                } else {
                    arr[rng.random_range(0..arr.len())].clone()
                }
            })
            .collect()
    }
}

fn variants<'a>(groups: &Groups<'a>, ch: char) -> Vec<&'a Record> {
    let (class, spelled, allow) = match digit_name(ch) {
        Some(d) => ("digit", d.to_owned(), DIGIT_GROUPS),
        None => ("letter", ch.to_string(), LETTER_GROUPS),
    };
    // Deny tokens the index never saw have nothing to exclude.
    let deny: Vec<&str> = DENY.iter().copied().filter(|t| groups.known(t)).collect();
    let mut out: Vec<&Record> = Vec::new();
    let mut seen: HashSet<u32> = HashSet::new();
    for g in allow {
        let include = [class.to_owned(), (*g).to_owned(), spelled.clone()];
        match groups.group(&include, &deny) {
            Ok(recs) => {
                for r in recs {
                    if seen.insert(r.int) {
                        out.push(r);
                    }
                }
            }
            // The allow-list is advisory; a group missing from this index
            // simply offers no candidates.
            Err(Error::UnknownToken(_)) => continue,
            Err(_) => continue,
        }
    }
    out
}
