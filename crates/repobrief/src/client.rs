//! Anonymous GitHub REST API client
//!
//! A thin wrapper over [`reqwest::Client`] that speaks the three endpoints
//! this crate needs: repository metadata, recursive trees, and file
//! contents. No auth, no retries; a rate-limit rejection surfaces as the
//! same API error as any other non-success status.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::BriefError;
use crate::reference::RepoRef;
use crate::types::{FileContent, RepoMetadata, TreeResponse};
use crate::DEFAULT_USER_AGENT;

/// Base endpoint for repository API calls
pub const GITHUB_API_BASE: &str = "https://api.github.com/repos";

/// Branches tried in order when the requested branch has no tree
pub const FALLBACK_BRANCHES: [&str; 4] = ["main", "master", "develop", "dev"];

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Client for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    pub fn new() -> Result<Self, BriefError> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Create a client against an alternate base endpoint.
    ///
    /// Tests point this at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, BriefError> {
        let mut headers = HeaderMap::new();
        // The API rejects requests without a User-Agent
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(BriefError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch `GET /repos/{owner}/{repo}`.
    pub async fn repo_metadata(&self, reference: &RepoRef) -> Result<RepoMetadata, BriefError> {
        self.fetch_json(&reference.full_name()).await
    }

    /// Fetch `GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1`.
    pub async fn repo_tree(
        &self,
        reference: &RepoRef,
        branch: &str,
    ) -> Result<TreeResponse, BriefError> {
        let path = format!("{}/git/trees/{}?recursive=1", reference.full_name(), branch);
        self.fetch_json(&path).await
    }

    /// Fetch `GET /repos/{owner}/{repo}/contents/{path}?ref={branch}`.
    ///
    /// Tree paths arrive raw; each segment is percent-encoded so names
    /// containing `#` or `?` cannot cut the URL short and drop the ref.
    pub async fn file_content(
        &self,
        reference: &RepoRef,
        path: &str,
        branch: &str,
    ) -> Result<FileContent, BriefError> {
        let encoded_path = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let path = format!(
            "{}/contents/{}?ref={}",
            reference.full_name(),
            encoded_path,
            urlencoding::encode(branch)
        );
        self.fetch_json(&path).await
    }

    /// Fetch the recursive tree for `branch`, falling back through
    /// [`FALLBACK_BRANCHES`] until one succeeds.
    ///
    /// Returns the tree together with the branch that produced it, or the
    /// error from the last attempt when every candidate fails.
    pub async fn tree_with_fallback(
        &self,
        reference: &RepoRef,
        branch: &str,
    ) -> Result<(TreeResponse, String), BriefError> {
        let mut candidates = vec![branch.to_string()];
        for fallback in FALLBACK_BRANCHES {
            if fallback != branch {
                candidates.push(fallback.to_string());
            }
        }
        first_success(candidates, move |candidate| async move {
            self.repo_tree(reference, &candidate).await
        })
        .await
    }

    /// GET `{base}/{path}` and deserialize the JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BriefError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "fetching");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(BriefError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            return Err(BriefError::Api(status_text));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| BriefError::MalformedResponse(e.to_string()))
    }
}

/// Run `op` against each candidate in order, returning the first success
/// paired with the winning candidate, or the error from the last attempt.
async fn first_success<T, F, Fut>(
    candidates: Vec<String>,
    mut op: F,
) -> Result<(T, String), BriefError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, BriefError>>,
{
    let mut last_err = None;
    for candidate in candidates {
        match op(candidate.clone()).await {
            Ok(value) => return Ok((value, candidate)),
            Err(err) => {
                debug!(candidate = %candidate, error = %err, "candidate failed");
                last_err = Some(err);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| BriefError::Request("no candidates to try".to_string())))
}
