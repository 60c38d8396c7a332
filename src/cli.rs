// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every flag has a default, so running `repo-lister` with no arguments lists
// the default account into `github_projects.js`. Every flag can also be set
// through an environment variable (the `env = ...` attributes).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Account listed when none is given
pub const DEFAULT_ACCOUNT: &str = "dbusteed";

/// Where the generated data file lands when --output is not given
pub const DEFAULT_OUTPUT: &str = "github_projects.js";

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-lister",
    version,
    about = "List a GitHub account's repositories into a projects data file",
    long_about = "repo-lister fetches the public repositories of a GitHub account and writes them \
                  as a `const projects = [...]` literal, with TODO placeholders for the blurb and \
                  tags so the file can be edited by hand afterwards."
)]
pub struct Cli {
    /// GitHub account whose repositories are listed
    ///
    /// Accepts a bare username or a profile URL (https://github.com/<name>)
    #[arg(long, env = "REPO_LISTER_ACCOUNT", default_value = DEFAULT_ACCOUNT)]
    pub account: String,

    /// File to write, overwritten if it already exists
    #[arg(short, long, env = "REPO_LISTER_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "REPO_LISTER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Output format of the generated file
    #[arg(long, value_enum, default_value_t = OutputFormat::Js)]
    pub format: OutputFormat,

    /// Append `export { projects }` so the file can be imported as a module
    ///
    /// Only applies to the js format; combining it with --format json is an error
    #[arg(long)]
    pub export: bool,
}

/// The two shapes the generated file can take
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// `const projects = [ ... ]` JavaScript literal
    Js,
    /// Pretty-printed JSON array
    Json,
}
