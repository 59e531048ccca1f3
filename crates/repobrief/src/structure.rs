//! Project structure listing
//!
//! Renders a repository's flat tree into the indented listing embedded in
//! the generated document.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::client::GitHubClient;
use crate::error::BriefError;
use crate::reference::RepoRef;
use crate::types::TreeEntry;

/// Hard cap on emitted listing lines
pub const MAX_STRUCTURE_LINES: usize = 100;

const DIR_ICON: &str = "📁";
const FILE_ICON: &str = "📄";

/// Render a flat tree into an indented directory/file listing.
///
/// Directories sort before files, lexicographically by path within each
/// kind. Ancestor directories missing from the input are synthesized so
/// every line sits under its parents, and each path is emitted at most
/// once. Output never exceeds [`MAX_STRUCTURE_LINES`] lines; entries past
/// the cap are dropped.
pub fn build_structure(entries: &[TreeEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No files found in repository".to_string()];
    }

    let mut sorted: Vec<&TreeEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| (!a.is_dir(), a.path.as_str()).cmp(&(!b.is_dir(), b.path.as_str())));

    let mut lines = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    'entries: for entry in sorted {
        let segments: Vec<&str> = entry.path.split('/').collect();
        let mut prefix = String::new();

        for (depth, segment) in segments.iter().enumerate() {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);

            if seen.contains(prefix.as_str()) {
                continue;
            }
            if lines.len() == MAX_STRUCTURE_LINES {
                break 'entries;
            }

            // Intermediate segments are always directories; the final one
            // carries the entry's own kind.
            let is_last = depth + 1 == segments.len();
            let icon = if is_last && !entry.is_dir() {
                FILE_ICON
            } else {
                DIR_ICON
            };
            lines.push(format!("{}{} {}", "  ".repeat(depth), icon, segment));
            seen.insert(prefix.clone());
        }
    }

    lines
}

/// Fetch a repository's tree and render it as a listing.
///
/// Never fails: any upstream error becomes a one-line listing so callers
/// always have something to display.
pub async fn fetch_repo_structure(client: &GitHubClient, reference: &RepoRef) -> Vec<String> {
    match try_fetch_structure(client, reference).await {
        Ok(lines) => lines,
        Err(err) => {
            warn!(repo = %reference.full_name(), error = %err, "structure fetch failed");
            vec![format!("Error loading structure: {}", err)]
        }
    }
}

async fn try_fetch_structure(
    client: &GitHubClient,
    reference: &RepoRef,
) -> Result<Vec<String>, BriefError> {
    let metadata = client.repo_metadata(reference).await?;
    let branch = metadata.default_branch_or_main();
    let (tree, resolved) = client.tree_with_fallback(reference, branch).await?;
    if tree.truncated {
        debug!(repo = %reference.full_name(), branch = %resolved, "tree listing truncated by the API");
    }
    Ok(build_structure(&tree.tree))
}
