// src/projects/entry.rs

use crate::github::RepoRecord;
use serde::Serialize;

/// Filler for the fields that get written by hand after generation
pub const PLACEHOLDER: &str = "TODO";

// One block of the generated file
//
// `blurb` and `tags` are never inferred from the API; they always start as
// the placeholder and are edited by hand afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub url: String,
    pub blurb: String,
    pub tags: Vec<String>,
}

impl From<RepoRecord> for ProjectEntry {
    fn from(record: RepoRecord) -> Self {
        Self {
            name: record.name,
            url: record.html_url,
            blurb: PLACEHOLDER.to_string(),
            tags: vec![PLACEHOLDER.to_string()],
        }
    }
}
