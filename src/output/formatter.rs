use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::ranking::{competition_positions, sequential_positions, RankingEntry};
use crate::scoring::SkippedLine;

/// How the standings are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// "1. Team, 6 pts" lines
    #[default]
    Table,
    /// Tab-separated position, team, points
    Tsv,
    /// JSON array of rows
    Json,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// "1 pt" for exactly one point, "N pts" otherwise
pub fn format_points(points: u32) -> String {
    if points == 1 {
        format!("{} pt", points)
    } else {
        format!("{} pts", points)
    }
}

fn positions(entries: &[RankingEntry], shared_ranks: bool) -> Vec<usize> {
    if shared_ranks {
        competition_positions(entries)
    } else {
        sequential_positions(entries)
    }
}

/// Format standings one team per line: "{position}. {team}, {points}"
pub fn format_ranking_table(entries: &[RankingEntry], shared_ranks: bool, use_colors: bool) -> String {
    if entries.is_empty() {
        return "No games recorded.".to_string();
    }

    entries
        .iter()
        .zip(positions(entries, shared_ranks))
        .map(|(entry, position)| {
            let position = format!("{}.", position);
            let points = format_points(entry.points);
            if use_colors {
                format!("{} {}, {}", position.dimmed(), entry.team.bold(), points.cyan())
            } else {
                format!("{} {}, {}", position, entry.team, points)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format standings as tab-separated values for scripting
/// Columns: position, team, points (no headers, no colors)
pub fn format_tsv(entries: &[RankingEntry], shared_ranks: bool) -> String {
    entries
        .iter()
        .zip(positions(entries, shared_ranks))
        .map(|(entry, position)| format!("{}\t{}\t{}", position, entry.team, entry.points))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    position: usize,
    team: &'a str,
    points: u32,
}

/// Format standings as a pretty-printed JSON array
pub fn format_json(entries: &[RankingEntry], shared_ranks: bool) -> Result<String> {
    let rows: Vec<JsonRow> = entries
        .iter()
        .zip(positions(entries, shared_ranks))
        .map(|(entry, position)| JsonRow {
            position,
            team: &entry.team,
            points: entry.points,
        })
        .collect();

    serde_json::to_string_pretty(&rows).context("Failed to serialize standings")
}

/// Render standings in the requested format
pub fn render(
    entries: &[RankingEntry],
    format: OutputFormat,
    shared_ranks: bool,
    use_colors: bool,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_ranking_table(entries, shared_ranks, use_colors)),
        OutputFormat::Tsv => Ok(format_tsv(entries, shared_ranks)),
        OutputFormat::Json => format_json(entries, shared_ranks),
    }
}

/// Describe a skipped line for diagnostics: "line 3: 'raw text' (reason)"
pub fn format_skipped(skipped: &SkippedLine) -> String {
    format!(
        "line {}: '{}' ({})",
        skipped.line_number,
        skipped.raw.trim_end(),
        skipped.reason
    )
}
