//! Implementations of the command-line subcommands.
//!
//! Each command returns its rendered output so the binary only has to print
//! it.

use crate::config::{InfowarConfig, OutputFormat};
use anyhow::{Context, Result};
use infowar_rules::{GameSnapshot, HistoryEntry, Infowar, Position, adjacent_positions, distance};
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};

fn to_json<T: Serialize + ?Sized>(value: &T, config: &InfowarConfig) -> Result<String> {
    let json = if *config.pretty() {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Reads a JSON array of history entries.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_history(path: impl AsRef<Path>) -> Result<Vec<HistoryEntry>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    let entries: Vec<HistoryEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse history file {}", path.display()))?;
    info!(len = entries.len(), "History loaded");
    Ok(entries)
}

/// Renders a snapshot as text: status line, board, then the numbered log.
pub fn render_snapshot_text(game: &Infowar) -> String {
    let snapshot = GameSnapshot::from(game);
    let mut lines = vec![
        snapshot.status_string(),
        String::new(),
        game.board().display(),
        String::new(),
    ];
    lines.extend(
        game.history()
            .iter()
            .enumerate()
            .map(|(index, entry)| format!("{:>3}. {}", index + 1, entry)),
    );
    lines.join("\n")
}

/// Replays a history file and renders the resulting game.
#[instrument(skip(config))]
pub fn replay(path: &Path, config: &InfowarConfig) -> Result<String> {
    let game = Infowar::from_history(load_history(path)?).context("History does not replay")?;
    match config.format() {
        OutputFormat::Text => Ok(render_snapshot_text(&game)),
        OutputFormat::Json => to_json(&game.snapshot(), config),
    }
}

/// Replays a history file, appends one entry, and renders the new history.
#[instrument(skip(config))]
pub fn propose(path: &Path, entry: &str, config: &InfowarConfig) -> Result<String> {
    let mut game = Infowar::from_history(load_history(path)?).context("History does not replay")?;
    let entry: HistoryEntry = serde_json::from_str(entry).context("Failed to parse proposed entry")?;
    game.append(entry).with_context(|| format!("Rejected: {entry}"))?;
    match config.format() {
        OutputFormat::Text => Ok(format!(
            "Accepted: {entry}\n{}",
            game.snapshot().status_string()
        )),
        OutputFormat::Json => to_json(game.history(), config),
    }
}

/// Lists the neighbours of a slot.
#[instrument(skip(config))]
pub fn neighbors(circle: i64, rank: i64, config: &InfowarConfig) -> Result<String> {
    let position = Position::new(circle, rank)?;
    let adjacent = adjacent_positions(position);
    match config.format() {
        OutputFormat::Text => Ok(adjacent
            .iter()
            .map(|p| format!("{} ({})", p.key(), p.history_key()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => to_json(&adjacent, config),
    }
}

/// Step distance between two slots.
#[instrument(skip(config))]
pub fn measure(from: (i64, i64), to: (i64, i64), config: &InfowarConfig) -> Result<String> {
    let a = Position::new(from.0, from.1)?;
    let b = Position::new(to.0, to.1)?;
    let steps = distance(a, b)?;
    match config.format() {
        OutputFormat::Text => Ok(steps.to_string()),
        OutputFormat::Json => {
            let report = serde_json::json!({"from": a, "to": b, "distance": steps});
            to_json(&report, config)
        }
    }
}

/// JSON Schema of a history entry.
#[instrument(skip(config))]
pub fn schema(config: &InfowarConfig) -> Result<String> {
    to_json(&schemars::schema_for!(HistoryEntry), config)
}
