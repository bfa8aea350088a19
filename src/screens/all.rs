//! `all`: stream every catalog record to stdout.

use std::io::Write;

use crate::Result;
use crate::catalog;
use crate::fmt;

pub fn run(filter: &[String], exclude: &[String], json: bool, detail: bool) -> Result<()> {
    let recs = catalog::records().filter(|r| fmt::matches(&r.name, filter, exclude));
    let mut out = std::io::stdout().lock();
    if json {
        let all: Vec<_> = recs.collect();
        writeln!(out, "{}", serde_json::to_string(&all)?)?;
        return Ok(());
    }
    for rec in recs {
        if detail {
            writeln!(out, "{}", fmt::detail(&rec))?;
        } else {
            writeln!(out, "{}", fmt::line(&rec))?;
        }
    }
    Ok(())
}
