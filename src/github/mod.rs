//! GitHub change-set client for tidygate.
//!
//! Fetches the list of changed files (with their per-file patch strings) for
//! a pull request via the REST API. This is the only network boundary in the
//! pipeline; everything downstream operates on in-memory data.

use crate::changeset::ChangedFile;
use crate::error::{Result, TidygateError};
use reqwest::blocking::Client;

const API_ROOT: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("tidygate/", env!("CARGO_PKG_VERSION"));
const PER_PAGE: usize = 100;

/// Fetch the changed files of a pull request.
///
/// # Arguments
///
/// * `repo` - Repository in `owner/name` form
/// * `pr` - Pull request number
/// * `token` - Optional bearer token; unauthenticated requests work for
///   public repositories but hit a much lower rate limit
///
/// # Returns
///
/// * `Ok(Vec<ChangedFile>)` - The full change set, in API order
/// * `Err(TidygateError::UserError)` - `repo` is not `owner/name`
/// * `Err(TidygateError::ApiError)` - Transport failure or non-2xx response
pub fn fetch_pull_request_files(
    repo: &str,
    pr: u64,
    token: Option<&str>,
) -> Result<Vec<ChangedFile>> {
    let (owner, name) = split_repo(repo)?;
    let url = format!("{API_ROOT}/repos/{owner}/{name}/pulls/{pr}/files");

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| TidygateError::ApiError(format!("failed to build HTTP client: {}", e)))?;

    let mut files = Vec::new();
    let mut page = 1u32;
    loop {
        let mut request = client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())]);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| TidygateError::ApiError(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TidygateError::ApiError(format!(
                "GET {} returned {}\n\n\
                 Fix: check the repository name, the pull request number, and the token's permissions.",
                url, status
            )));
        }

        let batch: Vec<ChangedFile> = response
            .json()
            .map_err(|e| TidygateError::ApiError(format!("invalid change-set JSON: {}", e)))?;

        let last_page = batch.len() < PER_PAGE;
        files.extend(batch);
        if last_page {
            break;
        }
        page += 1;
    }

    tracing::debug!(repo, pr, files = files.len(), "fetched pull request change set");
    Ok(files)
}

/// Split an `owner/name` repository reference.
fn split_repo(repo: &str) -> Result<(&str, &str)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(TidygateError::UserError(format!(
            "invalid repository '{}': expected owner/name",
            repo
        ))),
    }
}
