//! imlex-prune: find and remove near-duplicate sentence pairs.
//!
//! Scans the `sentences` table of an imlex library, lists every
//! duplicate with its similarity score, and deletes the losing rows
//! after an explicit confirmation.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use imlex_core::{prune_duplicates, MatchKind, PruneConfig, PrunePlan};
use imlex_store::{SentenceStore, SqliteSentenceStore};

const DEFAULT_DB: &str = "sentences.db";

#[derive(Parser, Debug)]
#[command(name = "imlex-prune", version, about = "Remove near-duplicate sentence pairs")]
struct Cli {
    /// SQLite database holding the sentences table.
    #[arg(long, default_value = DEFAULT_DB)]
    db: PathBuf,

    /// Minimum similarity ratio for a fuzzy match (0.0 to 1.0).
    #[arg(long, default_value_t = 0.90)]
    threshold: f64,

    /// Sorted neighbors compared per sentence.
    #[arg(long, default_value_t = 10)]
    window: usize,

    /// Delete without prompting.
    #[arg(long)]
    yes: bool,

    /// Compute and print the plan, never delete.
    #[arg(long)]
    dry_run: bool,

    /// Print the plan as JSON instead of the text listing.
    #[arg(long)]
    json: bool,

    /// Reclaim file space after a confirmed deletion.
    #[arg(long)]
    vacuum: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store = SqliteSentenceStore::open(&cli.db)
        .with_context(|| format!("cannot open database {}", cli.db.display()))?;

    let config = PruneConfig {
        window_size: cli.window,
        similarity_threshold: cli.threshold,
    };

    let summary = prune_duplicates(&store, &config, |plan| {
        print_plan(plan, cli.json);
        if cli.dry_run {
            println!("Dry run: nothing deleted.");
            return false;
        }
        cli.yes || confirm_on_stdin(plan.len())
    })?;

    if summary.scanned == 0 {
        println!("The sentences table is empty.");
    } else if summary.plan.is_empty() {
        println!(
            "No duplicates found with the current settings ({} sentences scanned).",
            summary.scanned
        );
    } else if !summary.confirmed {
        if !cli.dry_run {
            println!("Operation cancelled.");
        }
    } else {
        println!(
            "Deleted {} of {} scanned sentences.",
            summary.deleted, summary.scanned
        );
        if cli.vacuum {
            store.vacuum().context("vacuum failed")?;
            println!("Reclaimed free pages.");
        }
    }

    Ok(())
}

/// Audit listing: every kept/discarded pair with its similarity score.
fn print_plan(plan: &PrunePlan, json: bool) {
    if json {
        match serde_json::to_string_pretty(plan) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("cannot render plan as JSON: {e}"),
        }
        return;
    }

    for m in &plan.matches {
        let label = match m.kind {
            MatchKind::Exact => "exact",
            MatchKind::Fuzzy => "fuzzy",
        };
        println!("Match ({label}, {:.2}):", m.score);
        println!("  KEEP:   [{}] {}", m.kept_id, m.kept_text);
        println!("  DELETE: [{}] {}", m.removed_id, m.removed_text);
    }
    println!();
    println!("Found {} duplicates to delete.", plan.len());
}

fn confirm_on_stdin(count: usize) -> bool {
    print!("Type 'yes' to confirm deletion of {count} rows: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => line.trim().eq_ignore_ascii_case("yes"),
        Err(_) => false,
    }
}
