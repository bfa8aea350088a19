//! Output rendering shared by the stdout formatters and the interactive
//! screens: single-line records, the staggered detail form, and block
//! indentation.

use crate::catalog::Record;

/// Separator used when indenting detail lines.
pub const SEP: &str = "   ";

/// One record on one line: `glyph name key:value …`.
pub fn line(rec: &Record) -> String {
    let extras: Vec<String> = rec
        .extras()
        .iter()
        .map(|(k, v)| format!("{k}:{v}"))
        .collect();
    format!("{} {} {}", rec.chr, rec.name, extras.join(" "))
}

/// The staggered multi-line form: glyph and name, then one indented line
/// per extension field.
pub fn detail(rec: &Record) -> String {
    let mut lines = vec![format!("{} {}", rec.chr, rec.name)];
    for (k, v) in rec.extras() {
        lines.push(format!("{SEP}{k}: {v}"));
    }
    lines.join("\n")
}

/// Shift a text block right by `shift` spaces.
pub fn tab_shift(block: &str, shift: usize) -> String {
    let sep = " ".repeat(shift);
    block
        .lines()
        .map(|l| format!("{sep}{l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A titled block of single-line records, ordered by codepoint.
pub fn group_detail(title: &str, records: &[&Record]) -> String {
    let mut sorted: Vec<&Record> = records.to_vec();
    sorted.sort_by_key(|r| r.int);
    let body = sorted
        .into_iter()
        .map(line)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{title}\n{}", tab_shift(&body, 4))
}

/// The universal name filter: every `include` substring present, every
/// `exclude` substring absent.
pub fn matches(name: &str, include: &[String], exclude: &[String]) -> bool {
    include.iter().all(|i| name.contains(i.as_str()))
        && !exclude.iter().any(|e| name.contains(e.as_str()))
}
