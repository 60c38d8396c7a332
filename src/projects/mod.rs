// src/projects/mod.rs
// =============================================================================
// This module turns repository records into the projects data file.
//
// Submodules:
// - entry: the ProjectEntry record (name, url and two TODO placeholders)
// - render: writes entries as a `const projects = [...]` literal or as JSON
// =============================================================================

mod entry;
mod render;

pub use entry::ProjectEntry;
pub use render::{render_js, render_json};
