// src/github/fetch.rs
// =============================================================================
// This module lists the repositories of a GitHub account.
//
// Strategy:
// - Build `{api}/users/{account}/repos?per_page=100`
// - Send one GET request (only the first page is read)
// - Decode the JSON array, keeping just `name` and `html_url`
//
// The GitHub API refuses requests without a User-Agent, so the client
// always sends `repo-lister/<version>`.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

/// Page size sent with the listing request. Only one page is fetched.
pub const PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// One element of the API's JSON array
//
// serde ignores every field we don't name here (owner, stargazers_count, ...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub html_url: String,
}

/// Creates the HTTP client used for the listing request
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")
}

// Fetches the first page of repositories for an account
//
// Parameters:
//   client: reqwest HTTP client
//   api_url: base of the REST API (e.g., "https://api.github.com")
//   account: GitHub username
//
// Returns: the records in the order the API returned them
pub async fn fetch_repos(client: &Client, api_url: &str, account: &str) -> Result<Vec<RepoRecord>> {
    let url = repos_url(api_url, account)?;
    info!(%url, "Listing repositories for {}", account);

    let response = client
        .get(url.clone())
        .header(header::ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Failed to list repositories for {}: HTTP {}",
            account,
            response.status()
        ));
    }

    let repos: Vec<RepoRecord> = response
        .json()
        .await
        .with_context(|| format!("Malformed repository list from {}", url))?;

    debug!(count = repos.len(), "Decoded repository records");
    Ok(repos)
}

// Builds the listing endpoint for an account
//
// Example:
//   ("https://api.github.com", "dbusteed")
//     -> https://api.github.com/users/dbusteed/repos?per_page=100
fn repos_url(api_url: &str, account: &str) -> Result<Url> {
    let mut url = Url::parse(api_url).with_context(|| format!("Invalid API URL: {}", api_url))?;

    url.path_segments_mut()
        .map_err(|_| anyhow!("API URL cannot be used as a base: {}", api_url))?
        .pop_if_empty()
        .extend(["users", account, "repos"]);

    url.query_pairs_mut()
        .append_pair("per_page", &PER_PAGE.to_string());

    Ok(url)
}

// Reduces an account argument to a bare GitHub username
//
// Supported formats:
//   - dbusteed
//   - https://github.com/dbusteed
//   - https://github.com/dbusteed?tab=repositories (query and fragment dropped)
//   - github.com/dbusteed/some-repo (the repo part is dropped)
pub fn parse_account(input: &str) -> Result<String> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(anyhow!("Missing GitHub account name"));
    }

    let looks_like_url = trimmed.contains("://")
        || trimmed.starts_with("github.com")
        || trimmed.starts_with("www.github.com");

    if !looks_like_url {
        if trimmed.contains(['/', '?', '#']) {
            return Err(anyhow!("Not a GitHub account or profile URL: {}", input));
        }
        return Ok(trimmed.to_string());
    }

    let url = if trimmed.contains("://") {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("https://{}", trimmed))
    }
    .with_context(|| format!("Invalid profile URL: {}", input))?;

    if !matches!(url.host_str(), Some("github.com") | Some("www.github.com")) {
        return Err(anyhow!("Not a GitHub profile URL: {}", input));
    }

    // Url has already split off the query and fragment
    let name = url
        .path_segments()
        .and_then(|mut segments| segments.find(|s| !s.is_empty()))
        .ok_or_else(|| anyhow!("Missing GitHub account name in: {}", input))?;

    Ok(name.to_string())
}
