// src/lister.rs
// =============================================================================
// The repository lister pipeline:
//
//   request -> parse -> format -> write
//
// Everything runs in sequence on the current task. The output file is
// replaced in a single write once the whole text has been rendered, so a
// failed request or decode leaves any previous file untouched.
// =============================================================================

use crate::cli::{Cli, OutputFormat};
use crate::github::{self, PER_PAGE};
use crate::projects::{self, ProjectEntry};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Everything one run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct ListerConfig {
    pub account: String,
    pub output: PathBuf,
    pub api_url: String,
    pub format: OutputFormat,
    pub export: bool,
}

impl ListerConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.export && cli.format != OutputFormat::Js {
            bail!("--export only applies to --format js");
        }

        Ok(Self {
            account: github::parse_account(&cli.account)?,
            output: cli.output,
            api_url: cli.api_url,
            format: cli.format,
            export: cli.export,
        })
    }
}

/// Lists the account's repositories into the output file
///
/// Returns the number of entries written.
pub async fn run_lister(config: &ListerConfig) -> Result<usize> {
    let client = github::build_client()?;

    let repos = github::fetch_repos(&client, &config.api_url, &config.account).await?;
    if repos.len() >= PER_PAGE as usize {
        info!("Got a full page of {} repositories; later pages are not fetched", PER_PAGE);
    }

    let entries: Vec<ProjectEntry> = repos.into_iter().map(ProjectEntry::from).collect();

    let text = match config.format {
        OutputFormat::Js => projects::render_js(&entries, config.export)?,
        OutputFormat::Json => projects::render_json(&entries)?,
    };

    tokio::fs::write(&config.output, text)
        .await
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    info!(path = %config.output.display(), entries = entries.len(), "Wrote projects file");
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const FOO_BODY: &str = r#"[{"name":"foo","html_url":"https://github.com/dbusteed/foo"}]"#;

    async fn mock_repos(server: &mut mockito::ServerGuard, body: &str) -> mockito::Mock {
        server
            .mock("GET", "/users/dbusteed/repos")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    fn config(server: &mockito::ServerGuard, output: PathBuf) -> ListerConfig {
        ListerConfig {
            account: "dbusteed".to_string(),
            output,
            api_url: server.url(),
            format: OutputFormat::Js,
            export: false,
        }
    }

    #[tokio::test]
    async fn test_writes_single_project() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_repos(&mut server, FOO_BODY).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("github_projects.js");

        let count = run_lister(&config(&server, output.clone())).await.unwrap();

        assert_eq!(count, 1);
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "const projects = [\n\
             \t{\n\
             \t\tname: \"foo\",\n\
             \t\turl: \"https://github.com/dbusteed/foo\",\n\
             \t\tblurb: \"TODO\",\n\
             \t\ttags: [\"TODO\"]\n\
             \t},\n\
             ]\n"
        );
    }

    #[tokio::test]
    async fn test_empty_account() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_repos(&mut server, "[]").await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("github_projects.js");

        let count = run_lister(&config(&server, output.clone())).await.unwrap();

        assert_eq!(count, 0);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "const projects = [\n]\n");
    }

    #[tokio::test]
    async fn test_overwrites_and_is_idempotent() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_repos(&mut server, FOO_BODY).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("github_projects.js");
        std::fs::write(&output, "stale contents that are much longer than the new file").unwrap();

        let config = config(&server, output.clone());
        run_lister(&config).await.unwrap();
        let first = std::fs::read(&output).unwrap();
        run_lister(&config).await.unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
        assert!(String::from_utf8(first).unwrap().starts_with("const projects = [\n"));
    }

    #[tokio::test]
    async fn test_full_page_is_written() {
        let records: Vec<serde_json::Value> = (0..PER_PAGE)
            .map(|i| {
                serde_json::json!({
                    "name": format!("repo-{}", i),
                    "html_url": format!("https://github.com/dbusteed/repo-{}", i),
                })
            })
            .collect();
        let body = serde_json::to_string(&records).unwrap();

        let mut server = mockito::Server::new_async().await;
        let _mock = mock_repos(&mut server, &body).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("github_projects.js");

        let count = run_lister(&config(&server, output.clone())).await.unwrap();

        assert_eq!(count, PER_PAGE as usize);
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.matches("\t{\n").count(), PER_PAGE as usize);
        assert!(written.contains("name: \"repo-99\","));
    }

    #[tokio::test]
    async fn test_json_format() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_repos(&mut server, FOO_BODY).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("projects.json");

        let mut config = config(&server, output.clone());
        config.format = OutputFormat::Json;
        run_lister(&config).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written[0]["name"], "foo");
        assert_eq!(written[0]["url"], "https://github.com/dbusteed/foo");
        assert_eq!(written[0]["tags"], serde_json::json!(["TODO"]));
    }

    #[tokio::test]
    async fn test_failed_request_leaves_file_alone() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/dbusteed/repos")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("github_projects.js");
        std::fs::write(&output, "previous").unwrap();

        let result = run_lister(&config(&server, output.clone())).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_config_from_cli_resolves_profile_url() {
        let cli = <Cli as clap::Parser>::try_parse_from([
            "repo-lister",
            "--account",
            "https://github.com/dbusteed",
        ])
        .unwrap();

        let config = ListerConfig::from_cli(cli).unwrap();
        assert_eq!(config.account, "dbusteed");
    }

    #[test]
    fn test_config_from_cli_rejects_export_with_json() {
        let cli = <Cli as clap::Parser>::try_parse_from([
            "repo-lister",
            "--format",
            "json",
            "--export",
        ])
        .unwrap();

        let err = ListerConfig::from_cli(cli).unwrap_err();
        assert!(err.to_string().contains("--export"), "unexpected error: {}", err);
    }

    #[test]
    fn test_config_from_cli_keeps_export_with_js() {
        let cli = <Cli as clap::Parser>::try_parse_from(["repo-lister", "--export"]).unwrap();

        let config = ListerConfig::from_cli(cli).unwrap();
        assert!(config.export);
        assert_eq!(config.format, OutputFormat::Js);
    }
}
