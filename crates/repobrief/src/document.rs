//! Documentation assembly
//!
//! Combines repository metadata, the structure listing, and README
//! contents into a single Markdown document.

use tracing::{debug, warn};

use crate::client::GitHubClient;
use crate::error::BriefError;
use crate::reference::RepoRef;
use crate::types::{EntryKind, ReadmeContent, RepoMetadata, TreeResponse};

/// Maximum characters of README body embedded in the document
pub const README_MAX_CHARS: usize = 10_000;

/// Marker appended when the README body is cut
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Recognized README filenames, matched case-sensitively against the last
/// path segment of blob entries
pub const README_CANDIDATES: [&str; 6] = [
    "README.md",
    "readme.md",
    "README.txt",
    "readme.txt",
    "README",
    "readme",
];

/// Assemble the Markdown document for a repository.
///
/// `structure` is the listing already produced by
/// [`fetch_repo_structure`](crate::structure::fetch_repo_structure); it is
/// embedded as-is. Never fails: if assembly cannot complete, the literal
/// `Error generating documentation` is returned instead.
pub async fn generate_documentation(
    client: &GitHubClient,
    reference: &RepoRef,
    structure: &[String],
) -> String {
    match try_generate(client, reference, structure).await {
        Ok(document) => document,
        Err(err) => {
            warn!(repo = %reference.full_name(), error = %err, "documentation failed");
            "Error generating documentation".to_string()
        }
    }
}

async fn try_generate(
    client: &GitHubClient,
    reference: &RepoRef,
    structure: &[String],
) -> Result<String, BriefError> {
    let metadata = client.repo_metadata(reference).await?;
    let branch = metadata.default_branch_or_main();

    // A missing tree only costs us the README section; the document is
    // still produced from metadata and the caller's structure listing.
    let readme = match client.tree_with_fallback(reference, branch).await {
        Ok((tree, resolved)) => {
            if tree.truncated {
                debug!(repo = %reference.full_name(), branch = %resolved, "tree listing truncated by the API");
            }
            find_readme(client, reference, &tree, &resolved).await
        }
        Err(err) => {
            warn!(repo = %reference.full_name(), error = %err, "no tree available for readme scan");
            None
        }
    };

    let readme_body = readme.map(|readme| truncate_readme(&readme.body));
    Ok(render_document(
        reference,
        &metadata,
        structure,
        readme_body.as_deref(),
    ))
}

/// Scan the tree's blobs in order for a README candidate that fetches and
/// decodes to a non-empty body. Candidates that fail or come back empty
/// are skipped, not fatal.
async fn find_readme(
    client: &GitHubClient,
    reference: &RepoRef,
    tree: &TreeResponse,
    branch: &str,
) -> Option<ReadmeContent> {
    for entry in &tree.tree {
        if entry.kind != EntryKind::Blob {
            continue;
        }
        if !README_CANDIDATES.contains(&entry.file_name()) {
            continue;
        }
        match fetch_readme_body(client, reference, &entry.path, branch).await {
            Ok(body) if body.is_empty() => {
                debug!(path = %entry.path, "readme candidate empty, skipped");
            }
            Ok(body) => {
                debug!(path = %entry.path, "readme found");
                return Some(ReadmeContent {
                    path: entry.path.clone(),
                    body,
                });
            }
            Err(err) => {
                debug!(path = %entry.path, error = %err, "readme candidate skipped");
            }
        }
    }
    None
}

async fn fetch_readme_body(
    client: &GitHubClient,
    reference: &RepoRef,
    path: &str,
    branch: &str,
) -> Result<String, BriefError> {
    let content = client.file_content(reference, path, branch).await?;
    content.decode()
}

/// Cut the README body to [`README_MAX_CHARS`] characters, appending
/// [`TRUNCATION_MARKER`] when anything was dropped.
fn truncate_readme(body: &str) -> String {
    if body.chars().count() <= README_MAX_CHARS {
        return body.to_string();
    }
    let mut cut: String = body.chars().take(README_MAX_CHARS).collect();
    cut.push_str(TRUNCATION_MARKER);
    cut
}

/// Render the final Markdown document
fn render_document(
    reference: &RepoRef,
    metadata: &RepoMetadata,
    structure: &[String],
    readme: Option<&str>,
) -> String {
    let description = metadata
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or("No description provided");
    let language = metadata
        .language
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or("Not specified");

    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", metadata.name));
    output.push_str(&format!("{}\n\n", description));

    output.push_str("## Repository Information\n\n");
    output.push_str(&format!("- **Owner:** {}\n", reference.owner));
    output.push_str(&format!("- **Repository:** {}\n", reference.name));
    output.push_str(&format!("- **Language:** {}\n", language));
    output.push_str(&format!("- **Stars:** {}\n", metadata.stargazers_count));
    output.push_str(&format!("- **Forks:** {}\n", metadata.forks_count));
    output.push_str(&format!("- **Open Issues:** {}\n", metadata.open_issues_count));
    output.push_str(&format!("- **URL:** {}\n\n", metadata.html_url));

    output.push_str("## Topics\n\n");
    if metadata.topics.is_empty() {
        output.push_str("No topics available\n\n");
    } else {
        for topic in &metadata.topics {
            output.push_str(&format!("- {}\n", topic));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "## Project Structure\n\n```\n{}\n```\n\n",
        structure.join("\n")
    ));

    if let Some(readme) = readme {
        output.push_str(&format!("## README\n\n```markdown\n{}\n```\n\n", readme));
    }

    output.push_str(
        "## About\n\nThis documentation was automatically generated from the GitHub repository.\n\n---\n\n*Generated with RepoBrief*",
    );

    output
}
