//! Plain-text rendering of boards, damage fields and search results.

use std::fmt::Write;

use towerpath_core::{Board, Path, Tile};
use towerpath_paths::{Damage, DamageField, SearchResult};

use crate::parse::{FREE, TOWER};

/// Marker drawn on every cell a path visits.
pub const PATH_MARK: char = '*';

fn tile_char(t: Tile) -> char {
    match t {
        Tile::Hazard => TOWER,
        Tile::Free => FREE,
    }
}

/// The board in its input notation, one row per line.
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(board.size() * (board.size() + 1));
    for row in board.rows() {
        out.extend(row.iter().map(|&t| tile_char(t)));
        out.push('\n');
    }
    out
}

/// The damage field, one row per line, with towers shown as `T`.
pub fn render_damage_field(field: &DamageField) -> String {
    let mut out = String::new();
    for row in field.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|d| match d {
                Damage::Impassable => "T".to_string(),
                Damage::Penalty(v) => v.to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Two-line summary of a search: the moves taken and the damage suffered.
pub fn render_summary(result: &SearchResult) -> String {
    let mut out = String::new();
    match (&result.path, result.cost()) {
        (Some(path), Some(cost)) => {
            let _ = writeln!(out, "best path: {path}");
            let _ = writeln!(out, "total damage: {cost}");
        }
        _ => {
            out.push_str("best path: none\n");
            out.push_str("total damage: inf\n");
        }
    }
    out
}

/// The board with every cell visited by `path` (start included) marked.
pub fn render_overlay(board: &Board, path: &Path) -> String {
    let n = board.size();
    let mut rows: Vec<Vec<char>> = board
        .rows()
        .map(|r| r.iter().map(|&t| tile_char(t)).collect())
        .collect();
    for p in path.points(board.start()) {
        if board.contains(p) {
            rows[p.y as usize][p.x as usize] = PATH_MARK;
        } else {
            log::warn!("overlay: path leaves the board at {p}");
            break;
        }
    }
    let mut out = String::with_capacity(n * (n + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
