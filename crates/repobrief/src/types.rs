//! Wire types for the GitHub REST API
//!
//! Each struct deserializes the subset of an API response this crate
//! actually reads. Unknown fields are ignored.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::error::BriefError;

/// Repository metadata from `GET /repos/{owner}/{repo}` (partial)
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
}

impl RepoMetadata {
    /// Branch to try first when fetching the tree.
    ///
    /// Falls back to `main` when the API omits the field or returns an
    /// empty string.
    pub fn default_branch_or_main(&self) -> &str {
        match self.default_branch.as_deref() {
            Some(branch) if !branch.is_empty() => branch,
            _ => "main",
        }
    }
}

/// Response of `GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1` (partial)
#[derive(Debug, Clone, Deserialize)]
pub struct TreeResponse {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    /// Set by the API when the recursive listing was cut off
    #[serde(default)]
    pub truncated: bool,
}

/// One record in a recursive tree listing
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    /// Slash-separated path relative to the repository root
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Tree entry kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Directory
    Tree,
    /// File
    Blob,
    /// Submodule pointers come back as `commit`; anything unrecognized
    /// lands here instead of failing the whole tree
    #[serde(other)]
    Other,
}

impl TreeEntry {
    /// Whether this entry is a directory
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Tree
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Response of `GET /repos/{owner}/{repo}/contents/{path}` for a file (partial)
#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

impl FileContent {
    /// Decode the payload into UTF-8 text.
    ///
    /// The API wraps base64 bodies with newlines, so whitespace is
    /// stripped before decoding. Files over 1 MB come back with
    /// `encoding: none` and an empty body; those are rejected here.
    pub fn decode(&self) -> Result<String, BriefError> {
        if self.encoding != "base64" {
            return Err(BriefError::Decode(format!(
                "unsupported encoding: {}",
                self.encoding
            )));
        }
        let cleaned: String = self
            .content
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(cleaned.as_bytes())
            .map_err(|e| BriefError::Decode(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| BriefError::Decode(e.to_string()))
    }
}

/// A README located in the tree, decoded and ready for rendering
#[derive(Debug, Clone)]
pub struct ReadmeContent {
    /// Path of the blob inside the repository
    pub path: String,
    /// Decoded body, not yet truncated
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_branch_fallback() {
        let mut metadata: RepoMetadata = serde_json::from_str(
            r#"{"name": "demo", "html_url": "https://github.com/o/demo"}"#,
        )
        .unwrap();
        assert_eq!(metadata.default_branch_or_main(), "main");

        metadata.default_branch = Some(String::new());
        assert_eq!(metadata.default_branch_or_main(), "main");

        metadata.default_branch = Some("trunk".to_string());
        assert_eq!(metadata.default_branch_or_main(), "trunk");
    }

    #[test]
    fn test_tree_entry_kinds() {
        let response: TreeResponse = serde_json::from_str(
            r#"{
                "tree": [
                    {"path": "src", "type": "tree"},
                    {"path": "src/main.rs", "type": "blob"},
                    {"path": "vendored", "type": "commit"}
                ],
                "truncated": false
            }"#,
        )
        .unwrap();

        assert_eq!(response.tree.len(), 3);
        assert_eq!(response.tree[0].kind, EntryKind::Tree);
        assert!(response.tree[0].is_dir());
        assert_eq!(response.tree[1].kind, EntryKind::Blob);
        assert!(!response.tree[1].is_dir());
        // Submodule entry must not break deserialization
        assert_eq!(response.tree[2].kind, EntryKind::Other);
        assert!(!response.tree[2].is_dir());
    }

    #[test]
    fn test_tree_defaults_to_empty() {
        let response: TreeResponse = serde_json::from_str("{}").unwrap();
        assert!(response.tree.is_empty());
        assert!(!response.truncated);
    }

    #[test]
    fn test_file_name() {
        let entry = TreeEntry {
            path: "docs/guide/README.md".to_string(),
            kind: EntryKind::Blob,
        };
        assert_eq!(entry.file_name(), "README.md");

        let entry = TreeEntry {
            path: "README".to_string(),
            kind: EntryKind::Blob,
        };
        assert_eq!(entry.file_name(), "README");
    }

    #[test]
    fn test_decode_base64() {
        let content = FileContent {
            content: "SGVsbG8sIFdvcmxkIQ==".to_string(),
            encoding: "base64".to_string(),
        };
        assert_eq!(content.decode().unwrap(), "Hello, World!");
    }

    #[test]
    fn test_decode_strips_embedded_newlines() {
        // The API hard-wraps base64 bodies at 60 columns
        let content = FileContent {
            content: "SGVsbG8s\nIFdvcmxk\nIQ==\n".to_string(),
            encoding: "base64".to_string(),
        };
        assert_eq!(content.decode().unwrap(), "Hello, World!");
    }

    #[test]
    fn test_decode_rejects_other_encodings() {
        let content = FileContent {
            content: String::new(),
            encoding: "none".to_string(),
        };
        let err = content.decode().unwrap_err();
        assert!(err.to_string().contains("unsupported encoding"));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let content = FileContent {
            content: "not base64 at all!!!".to_string(),
            encoding: "base64".to_string(),
        };
        assert!(content.decode().is_err());
    }
}
