// src/projects/render.rs
// =============================================================================
// This module writes ProjectEntry values out as text.
//
// The js format looks like this (tab indented):
//
//   const projects = [
//   	{
//   		name: "foo",
//   		url: "https://github.com/dbusteed/foo",
//   		blurb: "TODO",
//   		tags: ["TODO"]
//   	},
//   ]
//
// Keys are bare identifiers; every value goes through serde_json, whose
// string encoding is also valid JavaScript. A name containing a quote comes
// out escaped instead of breaking the literal.
// =============================================================================

use super::ProjectEntry;
use anyhow::Result;
use std::fmt::Write;

pub const OPENING_MARKER: &str = "const projects = [\n";
pub const CLOSING_MARKER: &str = "]\n";
pub const EXPORT_TRAILER: &str = "\nexport { projects }\n";

/// Renders entries as a `const projects = [...]` literal
///
/// With `export` set, `export { projects }` follows the closing marker.
pub fn render_js(entries: &[ProjectEntry], export: bool) -> Result<String> {
    let mut out = String::from(OPENING_MARKER);

    for entry in entries {
        write_entry(&mut out, entry)?;
    }

    out.push_str(CLOSING_MARKER);

    if export {
        out.push_str(EXPORT_TRAILER);
    }

    Ok(out)
}

/// Renders entries as a pretty-printed JSON array
pub fn render_json(entries: &[ProjectEntry]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(entries)?;
    out.push('\n');
    Ok(out)
}

fn write_entry(out: &mut String, entry: &ProjectEntry) -> Result<()> {
    writeln!(out, "\t{{")?;
    writeln!(out, "\t\tname: {},", serde_json::to_string(&entry.name)?)?;
    writeln!(out, "\t\turl: {},", serde_json::to_string(&entry.url)?)?;
    writeln!(out, "\t\tblurb: {},", serde_json::to_string(&entry.blurb)?)?;
    writeln!(out, "\t\ttags: {}", serde_json::to_string(&entry.tags)?)?;
    writeln!(out, "\t}},")?;
    Ok(())
}
