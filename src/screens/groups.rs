//! `groups`: rank token groups by how many records they hold.

use std::io::Write;

use comfy_table::{ContentArrangement, Table};

use crate::Result;
use crate::fmt;
use crate::query::Groups;

pub fn run(filter: &[String], exclude: &[String], json: bool) -> Result<()> {
    let groups = Groups::shared();
    let ranked: Vec<(&str, usize)> = groups
        .ranked()
        .into_iter()
        .filter(|(token, _)| fmt::matches(token, filter, exclude))
        .collect();
    let mut out = std::io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(&ranked)?)?;
        return Ok(());
    }
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["token", "records"]);
    for (token, count) in ranked {
        table.add_row(vec![token.to_owned(), count.to_string()]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}
