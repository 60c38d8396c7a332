// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Turning an account argument (name or profile URL) into a username
// - Listing the first page (100) of an account's public repositories
//
// No authentication and no pagination: the lister makes one unauthenticated
// request.
// =============================================================================

mod fetch;

pub use fetch::{build_client, fetch_repos, parse_account, RepoRecord, PER_PAGE};
