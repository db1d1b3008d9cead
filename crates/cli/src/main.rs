//! hrlog CLI - log a work note under the current directory's hierarchy

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use hrlog_core::{append_entry, AppendRequest};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Environment variable overriding the log document path.
const DOCUMENT_ENV_VAR: &str = "HRLOG_FILE";

/// Default document name under the home directory.
const DEFAULT_DOCUMENT: &str = ".hrloginfo";

/// hrlog - hierarchical directory logging
#[derive(Parser)]
#[command(name = "hrlog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Note text; multiple words are joined with single spaces
    words: Vec<String>,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let description = cli.words.join(" ");
    if description.trim().is_empty() {
        println!("[hrlog] Usage: hrlog 'description'");
        return ExitCode::SUCCESS;
    }

    match run(&description) {
        Ok(display_path) => {
            println!("[hrlog] {} Logged: {}", "✓".green(), display_path);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("[hrlog] {} {:#}", "Error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(description: &str) -> Result<String> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let home_dir = dirs::home_dir().context("Failed to determine home directory")?;
    let document = document_path(&home_dir);
    let now = Local::now().naive_local();

    let request = AppendRequest::new(&document, description, &current_dir, &home_dir, now);
    let display_path = append_entry(&request).context("Failed to append log entry")?;
    Ok(display_path)
}

fn document_path(home_dir: &std::path::Path) -> PathBuf {
    match std::env::var_os(DOCUMENT_ENV_VAR) {
        Some(path) => PathBuf::from(path),
        None => home_dir.join(DEFAULT_DOCUMENT),
    }
}
