//! RepoBrief CLI - generate repository docs, structure listings, and ChatGPT deeplinks

use clap::{Parser, Subcommand, ValueEnum};
use repobrief::{
    chatgpt_deeplink, fetch_repo_structure, generate_documentation, BriefError, GitHubClient,
    RepoRef,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output format for the doc subcommand
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Markdown document
    #[default]
    Md,
    /// JSON bundle with structure, document, and deeplink
    Json,
}

/// RepoBrief - repository documentation and ChatGPT deeplink generation
#[derive(Parser, Debug)]
#[command(name = "repobrief")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the Markdown documentation for a repository
    Doc {
        /// Repository URL or owner/repo shorthand
        repo: String,

        /// Output format
        #[arg(long, short, default_value = "md")]
        output: OutputFormat,

        /// Write the output to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the project structure listing
    Structure {
        /// Repository URL or owner/repo shorthand
        repo: String,
    },
    /// Print the ChatGPT deeplink for a repository
    Link {
        /// Repository URL or owner/repo shorthand
        repo: String,
    },
}

/// JSON bundle emitted by `doc --output json`
#[derive(Debug, Serialize)]
struct BriefBundle {
    repo: String,
    owner: String,
    name: String,
    structure: Vec<String>,
    document: String,
    deeplink: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Doc { repo, output, out } => run_doc(&repo, output, out).await,
        Commands::Structure { repo } => run_structure(&repo).await,
        Commands::Link { repo } => run_link(&repo).await,
    }
}

async fn run_doc(repo: &str, output: OutputFormat, out: Option<PathBuf>) {
    let reference = parse_or_exit(repo);
    let client = client_or_exit();

    let structure = fetch_repo_structure(&client, &reference).await;
    let document = generate_documentation(&client, &reference, &structure).await;

    let rendered = match output {
        OutputFormat::Md => document,
        OutputFormat::Json => {
            let deeplink = chatgpt_deeplink(&document, repo.trim());
            let bundle = BriefBundle {
                repo: repo.trim().to_string(),
                owner: reference.owner,
                name: reference.name,
                structure,
                document,
                deeplink,
            };
            serde_json::to_string_pretty(&bundle).unwrap_or_else(|e| {
                eprintln!("Error serializing bundle: {}", e);
                std::process::exit(1);
            })
        }
    };

    match out {
        Some(path) => match std::fs::write(&path, &rendered) {
            // Keep stdout clean for piping; report the file on stderr
            Ok(()) => eprintln!("Wrote {}", path.display()),
            Err(e) => {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => writeln_safe(&rendered),
    }
}

async fn run_structure(repo: &str) {
    let reference = parse_or_exit(repo);
    let client = client_or_exit();

    let lines = fetch_repo_structure(&client, &reference).await;
    writeln_safe(&lines.join("\n"));
}

async fn run_link(repo: &str) {
    let reference = parse_or_exit(repo);
    let client = client_or_exit();

    // The deeplink embeds the full document, so the whole pipeline runs
    let structure = fetch_repo_structure(&client, &reference).await;
    let document = generate_documentation(&client, &reference, &structure).await;
    writeln_safe(&chatgpt_deeplink(&document, repo.trim()));
}

fn parse_or_exit(repo: &str) -> RepoRef {
    match RepoRef::parse(repo) {
        Some(reference) => reference,
        None => {
            eprintln!("Error: {}", BriefError::InvalidUrl);
            eprintln!("Expected https://github.com/owner/repo or owner/repo");
            std::process::exit(1);
        }
    }
}

fn client_or_exit() -> GitHubClient {
    match GitHubClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
