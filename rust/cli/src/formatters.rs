//! Text renderings of replay tables and events.
//!
//! Pure functions from engine data to strings: aligned plain-text tables for
//! terminals, RFC 4180 style CSV for spreadsheets, and one-line event
//! summaries for `replay`.

use tricklog_engine::replay::{CardCountTable, Event, EventKind};
use tricklog_engine::report::{PointsTable, Standing};

/// Header row plus string cells, ready for [`render_table`] or [`render_csv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn card_count_grid(table: &CardCountTable) -> Grid {
    let mut headers = vec!["Round".to_string()];
    headers.extend(table.players.iter().cloned());
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.round.to_string()];
            cells.extend(row.counts.iter().map(u32::to_string));
            cells
        })
        .collect();
    Grid { headers, rows }
}

pub fn points_grid(table: &PointsTable) -> Grid {
    let mut headers = vec!["Game".to_string()];
    headers.extend(table.players.iter().cloned());
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.game.to_string()];
            cells.extend(row.points.iter().map(i64::to_string));
            cells
        })
        .collect();
    Grid { headers, rows }
}

pub fn standings_grid(standings: &[Standing]) -> Grid {
    Grid {
        headers: vec!["Player".to_string(), "Points".to_string()],
        rows: standings
            .iter()
            .map(|s| vec![s.player.clone(), s.points.to_string()])
            .collect(),
    }
}

/// Left-aligned columns separated by two spaces, with a dashed rule under the header.
///
/// # Example
///
/// ```rust
/// use tricklog_cli::formatters::{render_table, Grid};
///
/// let grid = Grid {
///     headers: vec!["Round".into(), "A".into()],
///     rows: vec![vec!["1".into(), "12".into()]],
/// };
/// assert_eq!(render_table(&grid), "Round  A\n-----  --\n1      12\n");
/// ```
pub fn render_table(grid: &Grid) -> String {
    let mut widths: Vec<usize> = grid.headers.iter().map(|h| h.chars().count()).collect();
    for row in &grid.rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, &grid.headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &grid.rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let width = widths.get(i).copied().unwrap_or(0);
        line.push_str(&format!("{:<width$}", cell, width = width));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn render_csv(grid: &Grid) -> String {
    let mut out = String::new();
    push_csv_row(&mut out, &grid.headers);
    for row in &grid.rows {
        push_csv_row(&mut out, row);
    }
    out
}

fn push_csv_row(out: &mut String, cells: &[String]) {
    let escaped: Vec<String> = cells.iter().map(|c| csv_field(c)).collect();
    out.push_str(&escaped.join(","));
    out.push('\n');
}

/// Quotes a CSV field when it contains a separator, quote or newline.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// One-line summary of an event for the `replay` command.
pub fn format_event(event: &Event) -> String {
    let counts: Vec<String> = event
        .card_counts
        .iter()
        .map(|(p, n)| format!("{}={}", p, n))
        .collect();
    match event.kind {
        EventKind::Play => {
            let mut line = format!(
                "Round {:>3}  {} played [{}] to beat {} | cards: {}",
                event.round,
                event.player,
                event.cards_played,
                event.to_beat,
                counts.join(" ")
            );
            if !event.tracked_hand.is_empty() {
                line.push_str(&format!(" | hand: {}", event.tracked_hand));
            }
            line
        }
        EventKind::GameEnd => {
            let winner = if event.player.is_empty() {
                "no points recorded"
            } else {
                event.player.as_str()
            };
            format!(
                "Round {:>3}  Game over, winner: {} | points: {}",
                event.round,
                winner,
                counts.join(" ")
            )
        }
    }
}
