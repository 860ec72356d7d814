//! Log command - View and manage the persisted diagnostic log
//!
//! Reads the same storage the application's error reporter writes to,
//! so recorded failures can be inspected after the fact.

use std::sync::Arc;

use anyhow::{Context, Result};
use broodlog_core::config::Config;
use broodlog_core::domain::DiagnosticEvent;
use broodlog_diagnostics::{FileStorage, LogStore};
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum LogCommand {
    /// List recorded diagnostic events, newest first
    List {
        /// Maximum number of events to show
        #[arg(long, default_value = "50")]
        limit: usize,
    },
    /// Show one event in full
    Show {
        /// Event id, as printed by `broodlog log list`
        id: String,
    },
    /// Delete the persisted log
    Clear,
}

impl LogCommand {
    pub async fn execute(&self, config: &Config, json: bool) -> Result<()> {
        let storage = Arc::new(FileStorage::new(config.storage.data_dir.clone()));
        let store = LogStore::new(storage);

        match self {
            LogCommand::List { limit } => list(&store, *limit, json),
            LogCommand::Show { id } => show(&store, id),
            LogCommand::Clear => clear(&store),
        }
    }
}

fn list(store: &LogStore, limit: usize, json: bool) -> Result<()> {
    let events = store.read_all();
    tracing::info!(count = events.len(), "Loaded diagnostic events");
    let shown = &events[..events.len().min(limit)];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No diagnostic events recorded.");
        return Ok(());
    }

    println!(
        "{:<15} {:<22} {:<24} MESSAGE",
        "ID", "TIMESTAMP", "OPERATION"
    );
    for event in shown {
        println!(
            "{:<15} {:<22} {:<24} {}",
            event.id(),
            event.timestamp().format("%Y-%m-%d %H:%M:%S"),
            event.operation(),
            event.details().message,
        );
    }
    Ok(())
}

fn show(store: &LogStore, id: &str) -> Result<()> {
    let events = store.read_all();
    let found: Option<&DiagnosticEvent> = events.iter().find(|e| e.id().as_str() == id);

    match found {
        Some(event) => {
            println!("{}", serde_json::to_string_pretty(event)?);
            Ok(())
        }
        None => {
            println!("No event with id {id}.");
            Ok(())
        }
    }
}

fn clear(store: &LogStore) -> Result<()> {
    store
        .clear()
        .context("Failed to clear the diagnostic log")?;
    println!("Diagnostic log cleared.");
    Ok(())
}
