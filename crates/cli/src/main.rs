mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{SortKey, SortState, query};
use review::{DEFAULT_MAX_RESULTS, ReviewConfig, ReviewPhase, ReviewPipeline};
use sources::FixtureSource;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use storage::{FileStore, SavedCandidateStore, SnapshotStatus};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::render::{print_candidate_card, print_saved_table};

/// Scout - review candidate profiles and manage the saved shortlist
#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Browse candidates one at a time and search the ones you saved", long_about = None)]
struct Cli {
    /// File the saved-candidate list is persisted to
    #[arg(short, long, default_value = "saved_candidates.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review candidates interactively (s = save, k = skip, r = reload, q = quit)
    Review {
        /// JSON fixture with `candidates` and `details`
        #[arg(long)]
        source: PathBuf,

        /// Maximum number of candidates per load
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max: usize,
    },

    /// List saved candidates
    Saved {
        /// Case-insensitive text matched against name, username, location, email and company
        #[arg(long, default_value = "")]
        search: String,

        /// Field to sort by (fullName, userLogin, userLocation, contactEmail, profileUrl, companyName, ...)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Remove every saved entry with the given username
    Remove {
        #[arg(long)]
        login: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let medium = Arc::new(FileStore::new(&cli.store));
    let (saved, status) = SavedCandidateStore::open(medium)
        .with_context(|| format!("Failed to open saved candidates at {}", cli.store.display()))?;
    if let SnapshotStatus::Cleared { reason } = &status {
        println!(
            "{} Saved candidates could not be read and have been cleared ({})",
            "!".yellow(),
            reason
        );
    }
    let saved = Arc::new(saved);

    match cli.command {
        Commands::Review { source, max } => handle_review(saved, source, max).await?,
        Commands::Saved { search, sort, desc } => handle_saved(&saved, &search, sort, desc)?,
        Commands::Remove { login } => handle_remove(&saved, &login)?,
    }

    Ok(())
}

/// Handle the 'review' command
async fn handle_review(saved: Arc<SavedCandidateStore>, source: PathBuf, max: usize) -> Result<()> {
    let source = FixtureSource::from_path(&source)
        .with_context(|| format!("Failed to load candidate source {}", source.display()))?;
    let pipeline = ReviewPipeline::new(Arc::new(source), saved.clone(), ReviewConfig::new(max));

    if let Err(e) = pipeline.initialize().await {
        info!("Initial load failed, waiting for a manual reload: {}", e);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match pipeline.phase() {
            ReviewPhase::Ready { cursor } => {
                pipeline.ensure_enriched().await;
                if let Some(candidate) = pipeline.current() {
                    print_candidate_card(&candidate, cursor, pipeline.len());
                }
            }
            ReviewPhase::Exhausted => {
                println!("No candidates left. Press r to load more candidates.");
            }
            ReviewPhase::Errored => {
                println!("{} Error loading candidates, try again.", "✗".red());
            }
            ReviewPhase::Empty | ReviewPhase::Loading => {
                println!("No candidates available.");
            }
        }

        print!("[s]ave  s[k]ip  [r]eload  [q]uit > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "s" => match pipeline.current() {
                Some(candidate) => {
                    pipeline.save(&candidate)?;
                    println!("{} Saved {}", "✓".green(), candidate.user_login);
                }
                None => println!("Nothing to save."),
            },
            "k" => {
                if pipeline.skip().is_err() {
                    println!("Nothing to skip.");
                }
            }
            "r" => {
                if let Err(e) = pipeline.reinitialize().await {
                    info!("Reload failed: {}", e);
                }
            }
            "q" => break,
            other => println!("Unknown command: {}", other),
        }
    }

    println!("{} saved candidates in total", saved.len()?);
    Ok(())
}

/// Handle the 'saved' command
fn handle_saved(
    saved: &SavedCandidateStore,
    search: &str,
    sort: Option<SortKey>,
    desc: bool,
) -> Result<()> {
    let candidates = saved.candidates()?;
    println!("{}", "Saved Candidates".bold().blue());
    if candidates.is_empty() {
        println!("No candidates have been saved yet.");
        return Ok(());
    }

    let state = SortState {
        key: sort,
        ascending: !desc,
    };
    let rows = query(&candidates, search, state.key, state.ascending);
    if rows.is_empty() {
        println!("No candidates match the filter criteria.");
        return Ok(());
    }

    print_saved_table(&rows, &state);
    Ok(())
}

/// Handle the 'remove' command
fn handle_remove(saved: &SavedCandidateStore, login: &str) -> Result<()> {
    let removed = saved
        .remove(login)
        .with_context(|| format!("Failed to remove {}", login))?;
    if removed == 0 {
        println!("No saved candidate with username {}", login);
    } else {
        println!("{} Removed {} entries for {}", "✓".green(), removed, login);
    }
    Ok(())
}
