// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes. Every repository flag can also come from an
// environment variable (clap's `env` feature), which is how CI jobs usually
// configure the tool.
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "docs-digest",
    version,
    about = "Flatten a GitHub docs directory into one llms.txt file",
    long_about = "docs-digest downloads every Markdown document under a directory of a GitHub \
                  repository and concatenates them into a single text file for LLM ingestion. \
                  Relative links, images and HTML attributes are rewritten into absolute GitHub URLs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// Which repository and branch to read from
#[derive(Args, Debug, Clone)]
pub struct RepoArgs {
    /// Repository owner
    #[arg(long, env = "SOURCE_OWNER", default_value = "TanStack")]
    pub owner: String,

    /// Repository name
    #[arg(long, env = "SOURCE_REPO", default_value = "query")]
    pub repo: String,

    /// Branch to read
    #[arg(long, env = "SOURCE_BRANCH", default_value = "main")]
    pub branch: String,

    /// GitHub repository URL; overrides --owner and --repo
    ///
    /// Example: https://github.com/TanStack/query
    #[arg(long)]
    pub repo_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a docs directory and write the llms.txt file
    ///
    /// Example: docs-digest generate --docs-prefix docs/framework/react
    Generate {
        #[command(flatten)]
        repo: RepoArgs,

        /// Directory inside the repository to collect
        #[arg(long, env = "DOCS_PREFIX", default_value = "docs/framework/react")]
        docs_prefix: String,

        /// Where to write the result
        #[arg(short, long, env = "OUTPUT_FILE", default_value = "llms.txt")]
        output: PathBuf,

        /// Number of documents downloaded at the same time (at least 1)
        #[arg(long, env = "FETCH_CONCURRENCY", default_value_t = 8)]
        concurrency: usize,

        /// GitHub token for private repositories and higher rate limits
        ///
        /// Falls back to GH_TOKEN when GITHUB_TOKEN is not set.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Top-level heading of the generated file (default: "<owner>/<repo> Docs")
        #[arg(long)]
        title: Option<String>,

        /// Print a JSON summary instead of progress messages
        #[arg(long)]
        json: bool,
    },

    /// Rewrite the links of one local Markdown file and print it
    ///
    /// Example: docs-digest rewrite ./guide.md --path docs/framework/react/guide.md
    Rewrite {
        #[command(flatten)]
        repo: RepoArgs,

        /// Local Markdown file to read
        file: PathBuf,

        /// Path of the document inside the repository, used to resolve relative links
        #[arg(long)]
        path: String,
    },
}
