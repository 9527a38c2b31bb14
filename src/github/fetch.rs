// src/github/fetch.rs
// =============================================================================
// This module talks to GitHub.
//
// Strategy:
// - List the whole branch once with the Git Trees API (one request, no
//   directory walking)
// - Download each document from raw.githubusercontent.com, which serves the
//   plain file contents without the API's JSON wrapping
// - Send the token (if any) to both, so private repositories and higher
//   rate limits work
//
// There are no retries. A failed request fails the whole run.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

use super::tree::{markdown_paths, TreeResponse};
use crate::collect::DocumentSource;
use crate::config::RepoSource;

const CLIENT_USER_AGENT: &str = concat!("docs-digest/", env!("CARGO_PKG_VERSION"));

// How much of an error response body we keep in the error message
const ERROR_BODY_LIMIT: usize = 200;

/// GitHub access for one repository and branch
pub struct GithubClient {
    client: Client,
    source: RepoSource,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(source: RepoSource, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            source,
            token,
        })
    }

    // Adds the User-Agent and, if configured, the bearer token
    fn request(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url).header(USER_AGENT, CLIENT_USER_AGENT);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }
}

impl DocumentSource for GithubClient {
    async fn list_paths(&self, prefix: &str) -> Result<Vec<String>> {
        let url = self.source.tree_api_url();
        let request = self.request(&url).header(ACCEPT, "application/vnd.github+json");
        let response = send_checked(request, &url).await?;

        let tree: TreeResponse = response
            .json()
            .await
            .with_context(|| format!("Invalid JSON from {}", url))?;

        markdown_paths(tree, prefix)
    }

    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.source.raw_url(path);
        let response = send_checked(self.request(&url), &url).await?;
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", url))?;

        tracing::debug!(path, bytes = text.len(), "downloaded");
        Ok(text)
    }
}

// Sends a request and turns any non-2xx status into an error
async fn send_checked(request: RequestBuilder, url: &str) -> Result<Response> {
    let response = request
        .send()
        .await
        .with_context(|| format!("Request failed for {}", url))?;

    let status = response.status();
    if !status.is_success() {
        let body = match response.text().await {
            Ok(text) => summarize_body(&text),
            Err(_) => "unable to read response body".to_string(),
        };
        return Err(anyhow!(
            "Request failed ({}) for {}: {}",
            status.as_u16(),
            url,
            body
        ));
    }

    Ok(response)
}

// First ERROR_BODY_LIMIT characters of a body, whitespace runs collapsed
fn summarize_body(text: &str) -> String {
    let head: String = text.chars().take(ERROR_BODY_LIMIT).collect();
    head.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Parses a GitHub URL to extract owner and repository name
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo
//
// Returns: (owner, repo) tuple
//
// Example:
//   "https://github.com/TanStack/query" -> ("TanStack", "query")
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let url = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");

    let path = url
        .strip_prefix("github.com/")
        .ok_or_else(|| anyhow!("Not a GitHub URL: {}", url))?;

    let mut parts = path.split('/').filter(|part| !part.is_empty());
    let (owner, repo) = match (parts.next(), parts.next()) {
        (Some(owner), Some(repo)) => (owner, repo),
        _ => return Err(anyhow!("Invalid GitHub URL format: {}", url)),
    };

    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    Ok((owner.to_string(), repo.to_string()))
}
