// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
//
// The generate command is all-or-nothing: the output file is only written
// after every document was listed, downloaded and rewritten.
// =============================================================================

mod cli;
mod collect;
mod config;
mod github;
mod links;
mod output;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands, RepoArgs};
use collect::DocumentSource;
use config::{GenerateConfig, RepoSource};
use github::GithubClient;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            repo,
            docs_prefix,
            output,
            concurrency,
            token,
            title,
            json,
        } => {
            let token = token.or_else(|| std::env::var("GH_TOKEN").ok());
            let config = GenerateConfig::new(
                repo_source(&repo)?,
                &docs_prefix,
                output,
                concurrency,
                token,
                title,
            );
            handle_generate(&config, json).await
        }
        Commands::Rewrite { repo, file, path } => handle_rewrite(&repo_source(&repo)?, &file, &path),
    }
}

// --verbose forces DEBUG; otherwise RUST_LOG is used when set, else WARN
fn init_logging(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(log_directives(verbose, rust_log.as_deref())))
        .try_init();
}

fn log_directives(verbose: bool, rust_log: Option<&str>) -> String {
    match rust_log {
        _ if verbose => Level::DEBUG.to_string(),
        Some(directives) if !directives.trim().is_empty() => directives.to_string(),
        _ => Level::WARN.to_string(),
    }
}

fn repo_source(args: &RepoArgs) -> Result<RepoSource> {
    let (owner, repo) = match &args.repo_url {
        Some(url) => github::parse_github_url(url)?,
        None => (args.owner.clone(), args.repo.clone()),
    };
    Ok(RepoSource::new(owner, repo, args.branch.clone()))
}

// Handles the 'generate' subcommand
async fn handle_generate(config: &GenerateConfig, json: bool) -> Result<()> {
    let progress = |message: String| {
        if !json {
            println!("{}", message);
        }
    };

    let client = GithubClient::new(config.source.clone(), config.token.clone())?;
    let manifest = generate(&client, config, progress).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
    } else {
        println!("✅ Wrote {}", config.output.display());
    }

    Ok(())
}

// Lists, downloads, rewrites, renders and writes the artifact
//
// The output file is only touched after every step before it succeeded, so
// a failed listing or download leaves any previous file as it was.
async fn generate<S: DocumentSource>(
    documents: &S,
    config: &GenerateConfig,
    progress: impl Fn(String),
) -> Result<output::Manifest> {
    let source = &config.source;
    let tree_url = source.tree_url(&config.docs_prefix);

    progress(format!("🔍 Collecting Markdown files from {}", tree_url));

    let paths = documents
        .list_paths(&config.docs_prefix)
        .await
        .context("Failed to list repository files")?;

    if paths.is_empty() {
        return Err(anyhow!(
            "No Markdown files found under \"{}\".",
            config.docs_prefix
        ));
    }

    progress(format!("📄 Found {} file(s). Downloading content...", paths.len()));

    let docs = collect::collect_documents(documents, source, &paths, config.concurrency).await?;
    let text = output::render_llms_txt(&config.title, &tree_url, &docs);
    output::write_atomically(&config.output, &text).await?;

    Ok(output::Manifest::new(&config.output, &tree_url, &docs))
}

// Handles the 'rewrite' subcommand
fn handle_rewrite(source: &RepoSource, file: &Path, path: &str) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let document = collect::Document::new(source, path, &raw);
    println!("{}", document.content);
    Ok(())
}
