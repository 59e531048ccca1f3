//! RepoBrief - GitHub repository documentation and deeplink generation
//!
//! Turns a repository URL (or `owner/repo` shorthand) into three artifacts:
//! an indented project-structure listing, a Markdown document combining
//! metadata, topics, structure, and README contents, and a ChatGPT deeplink
//! pre-filled with that document as a prompt.
//!
//! The pipeline runs leaf to root: [`RepoRef::parse`] extracts the
//! reference, [`GitHubClient`] talks to the REST API anonymously,
//! [`fetch_repo_structure`] renders the tree, [`generate_documentation`]
//! assembles the document, and [`chatgpt_deeplink`] wraps it into a link.
//!
//! The two orchestration entry points never fail: upstream errors are
//! folded into renderable placeholder text, so callers can always display
//! something.

pub mod client;
pub mod deeplink;
pub mod document;
mod error;
pub mod reference;
pub mod structure;
mod types;

pub use client::{GitHubClient, FALLBACK_BRANCHES, GITHUB_API_BASE};
pub use deeplink::{chatgpt_deeplink, CHATGPT_BASE_URL};
pub use document::{
    generate_documentation, README_CANDIDATES, README_MAX_CHARS, TRUNCATION_MARKER,
};
pub use error::BriefError;
pub use reference::RepoRef;
pub use structure::{build_structure, fetch_repo_structure, MAX_STRUCTURE_LINES};
pub use types::{
    EntryKind, FileContent, ReadmeContent, RepoMetadata, TreeEntry, TreeResponse,
};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Everruns RepoBrief/1.0";
