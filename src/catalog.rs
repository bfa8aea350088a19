//! The catalog record source: one record per Unicode codepoint that carries a
//! character name. Codepoint-to-name lookup comes from `unicode_names2`; the
//! C0/C1 control codes, which have no Unicode name, are filled in from a
//! built-in description table so the common ASCII controls stay browsable.

use serde::{Deserialize, Serialize};

/// One catalog entry. `tokens` is derived from `name` and is the record's
/// identity key everywhere in the index; the remaining fields are extension
/// fields surfaced through [`Record::extras`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub chr: String,
    pub name: String,
    pub int: u32,
    pub hex: String,
    pub escape: String,
    pub html: String,
    pub tokens: Vec<String>,
}

impl Record {
    /// Build a record for a codepoint from its display name. The name is
    /// lowercased; tokens split on whitespace and hyphens.
    pub fn new(codepoint: u32, glyph: char, name: &str) -> Record {
        let name = name.to_lowercase();
        let tokens = tokenize(&name);
        Record {
            chr: glyph.to_string(),
            name,
            int: codepoint,
            hex: format!("{codepoint:x}"),
            escape: format!("\\u{{{codepoint:x}}}"),
            html: format!("&#{codepoint};"),
            tokens,
        }
    }

    /// The declared extension fields, in display order. Formatters iterate
    /// this list rather than reflecting over the record.
    pub fn extras(&self) -> [(&'static str, String); 4] {
        [
            ("int", self.int.to_string()),
            ("hex", self.hex.clone()),
            ("escape", self.escape.clone()),
            ("html", self.html.clone()),
        ]
    }
}

/// Lowercased name words, split on whitespace and hyphen.
pub fn tokenize(name: &str) -> Vec<String> {
    name.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Enumerate every named codepoint in the catalog, ascending.
pub fn records() -> impl Iterator<Item = Record> {
    (0..=char::MAX as u32).filter_map(record)
}

/// The record for a single codepoint, if it has a name.
pub fn record(codepoint: u32) -> Option<Record> {
    let glyph = char::from_u32(codepoint)?;
    let name = unicode_names2::name(glyph)
        .map(|n| n.to_string())
        .or_else(|| control_name(codepoint).map(str::to_owned))?;
    Some(Record::new(codepoint, glyph, &name))
}

const C0_NAMES: [&str; 32] = [
    "null",
    "start of heading",
    "start of text",
    "end of text",
    "end of transmission",
    "enquiry",
    "acknowledge",
    "bell",
    "backspace",
    "horizontal tabulation",
    "line feed",
    "vertical tabulation",
    "form feed",
    "carriage return",
    "shift out",
    "shift in",
    "data link escape",
    "device control one",
    "device control two",
    "device control three",
    "device control four",
    "negative acknowledge",
    "synchronous idle",
    "end of transmission block",
    "cancel",
    "end of medium",
    "substitute",
    "escape",
    "file separator",
    "group separator",
    "record separator",
    "unit separator",
];

const C1_NAMES: [&str; 32] = [
    "padding character",
    "high octet preset",
    "break permitted here",
    "no break here",
    "index",
    "next line",
    "start of selected area",
    "end of selected area",
    "character tabulation set",
    "character tabulation with justification",
    "line tabulation set",
    "partial line forward",
    "partial line backward",
    "reverse line feed",
    "single shift two",
    "single shift three",
    "device control string",
    "private use one",
    "private use two",
    "set transmit state",
    "cancel character",
    "message waiting",
    "start of guarded area",
    "end of guarded area",
    "start of string",
    "single graphic character introducer",
    "single character introducer",
    "control sequence introducer",
    "string terminator",
    "operating system command",
    "privacy message",
    "application program command",
];

/// Descriptions for the control codepoints `unicode_names2` has no name for.
fn control_name(codepoint: u32) -> Option<&'static str> {
    match codepoint {
        0x00..=0x1f => Some(C0_NAMES[codepoint as usize]),
        0x7f => Some("delete"),
        0x80..=0x9f => Some(C1_NAMES[codepoint as usize - 0x80]),
        _ => None,
    }
}
