//! `pairs`: write the curated left/right-style pairings to stdout.

use std::io::Write;

use serde_json::json;

use crate::Result;
use crate::fmt;
use crate::query::{self, Groups, Pair, PairSet, Pairs, PAIR_SETS};

/// Collect pairs for one named set, or every set for `all`. An unknown set
/// name fails before any output is produced.
fn collect(
    name: &str,
    filter: &[String],
    exclude: &[String],
) -> Result<Vec<(&'static PairSet, Pair<'static>)>> {
    let sets: Vec<&'static PairSet> = if name == "all" {
        PAIR_SETS.iter().collect()
    } else {
        vec![query::pair_set(name)?]
    };
    let groups = Groups::shared();
    let mut out = Vec::new();
    for set in sets {
        let preset: Vec<String> = set.exclude.iter().map(|s| (*s).to_owned()).collect();
        let pairs = Pairs::new(&groups, set.left, set.right, &[], &preset)?;
        for pair in pairs.pairs(filter, exclude) {
            out.push((set, pair));
        }
    }
    Ok(out)
}

pub fn run(
    name: &str,
    filter: &[String],
    exclude: &[String],
    json: bool,
    detail: bool,
) -> Result<()> {
    let rows = collect(name, filter, exclude)?;
    let mut out = std::io::stdout().lock();
    if json {
        let mut map = serde_json::Map::new();
        for (set, pair) in &rows {
            let title = format!("{} {} {}", set.tag.0, set.tag.1, pair.name);
            map.insert(
                title,
                json!({
                    "pair": [pair.left.chr, pair.right.chr],
                    "p1": pair.left,
                    "p2": pair.right,
                }),
            );
        }
        writeln!(out, "{}", serde_json::Value::Object(map))?;
        return Ok(());
    }
    for (set, pair) in &rows {
        writeln!(
            out,
            "{} {} {} {} {}",
            pair.left.chr, pair.right.chr, set.tag.0, set.tag.1, pair.name
        )?;
        if detail {
            let sub = format!("{}\n{}", fmt::line(pair.left), fmt::line(pair.right));
            writeln!(out, "{}", fmt::tab_shift(&sub, 4))?;
        }
    }
    Ok(())
}
