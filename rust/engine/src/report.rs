//! Session-wide points aggregation.

use crate::game::Game;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsRow {
    pub game: u32,
    /// One value per entry of [`PointsTable::players`].
    pub points: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTable {
    pub players: Vec<String>,
    pub rows: Vec<PointsRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: String,
    pub points: i64,
}

/// One row per game and one column per known player; unrecorded points read as 0.
pub fn points_table(games: &[Game], players: &BTreeSet<String>) -> PointsTable {
    let players: Vec<String> = players.iter().cloned().collect();
    let rows = games
        .iter()
        .map(|game| PointsRow {
            game: game.game_number,
            points: players
                .iter()
                .map(|p| game.points.get(p).copied().unwrap_or(0))
                .collect(),
        })
        .collect();
    PointsTable { players, rows }
}

/// Cumulative points per player, game by game.
pub fn running_totals(table: &PointsTable) -> PointsTable {
    let mut acc = vec![0i64; table.players.len()];
    let rows = table
        .rows
        .iter()
        .map(|row| {
            for (total, pts) in acc.iter_mut().zip(&row.points) {
                *total = total.saturating_add(*pts);
            }
            PointsRow {
                game: row.game,
                points: acc.clone(),
            }
        })
        .collect();
    PointsTable {
        players: table.players.clone(),
        rows,
    }
}

/// The last row of `table`, sorted by points descending.
///
/// Equal points keep column order. Empty when the table has no rows.
pub fn final_standings(table: &PointsTable) -> Vec<Standing> {
    let Some(last) = table.rows.last() else {
        return Vec::new();
    };
    let mut standings: Vec<Standing> = table
        .players
        .iter()
        .zip(&last.points)
        .map(|(player, &points)| Standing {
            player: player.clone(),
            points,
        })
        .collect();
    standings.sort_by(|a, b| b.points.cmp(&a.points));
    standings
}
