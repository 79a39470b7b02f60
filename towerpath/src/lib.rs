//! towerpath — command-line driver for the least-damage board crossing.
//!
//! Reads a board file, prints the board, its damage field and the best
//! crossing, and writes the crossing summary to an output file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use towerpath_core::Board;
use towerpath_io::{render_board, render_damage_field, render_overlay, render_summary};
use towerpath_paths::{DamageField, SearchResult, build_damage_field, find_minimum_damage_path};

/// Message shown when the input board cannot be validated.
pub const BAD_INPUT: &str = "input file does not follow the expected format";

/// Command-line options.
#[derive(Debug, Clone, Parser)]
#[command(name = "towerpath", version, about)]
pub struct Cli {
    /// Board description to read.
    #[arg(short, long, default_value = "in.txt")]
    pub input: PathBuf,

    /// File receiving the best path and its damage.
    #[arg(short, long, default_value = "out.txt")]
    pub output: PathBuf,

    /// Do not print the board with the path drawn on it.
    #[arg(long)]
    pub no_overlay: bool,
}

/// Everything computed for one board.
#[derive(Debug, Clone)]
pub struct Crossing {
    pub board: Board,
    pub field: DamageField,
    pub result: SearchResult,
}

impl Crossing {
    /// Build the damage field of `board` and search it.
    pub fn solve(board: Board) -> Self {
        let field = build_damage_field(&board);
        let result = find_minimum_damage_path(&board, &field);
        Self {
            board,
            field,
            result,
        }
    }

    /// The full console report.
    pub fn render(&self, overlay: bool) -> String {
        let mut out = String::new();
        out.push_str("board:\n");
        out.push_str(&render_board(&self.board));
        out.push_str("\ndamage field:\n");
        out.push_str(&render_damage_field(&self.field));
        out.push('\n');
        out.push_str(&render_summary(&self.result));
        if overlay {
            if let Some(path) = &self.result.path {
                out.push_str("\npath on board:\n");
                out.push_str(&render_overlay(&self.board, path));
            }
        }
        out
    }
}

/// Load the board named by `cli`, solve it, write the summary file and
/// return the console report.
pub fn run(cli: &Cli) -> Result<String> {
    let board = towerpath_io::load_board(&cli.input).context(BAD_INPUT)?;
    let crossing = Crossing::solve(board);

    match crossing.result.cost() {
        Some(cost) => log::info!("best crossing takes {cost} damage"),
        None => log::warn!("no crossing avoids every tower"),
    }

    fs::write(&cli.output, render_summary(&crossing.result))
        .with_context(|| format!("cannot write {}", cli.output.display()))?;
    log::info!("summary written to {}", cli.output.display());

    Ok(crossing.render(!cli.no_overlay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use towerpath_io::parse_board;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("towerpath-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["towerpath"]);
        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert!(!cli.no_overlay);
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::parse_from(["towerpath", "-i", "a.txt", "--output", "b.txt", "--no-overlay"]);
        assert_eq!(cli.input, PathBuf::from("a.txt"));
        assert_eq!(cli.output, PathBuf::from("b.txt"));
        assert!(cli.no_overlay);
    }

    #[test]
    fn render_includes_every_section() {
        let board = parse_board("3\n000\n0t0\n000").unwrap();
        let text = Crossing::solve(board).render(true);
        assert!(text.contains("damage field:\n10 10 10\n10 T 10\n10 10 10\n"));
        assert!(text.contains("best path: EESS"));
        assert!(text.contains("total damage: 40"));
        assert!(text.contains("path on board:\n***\n0t*\n00*\n"));
    }

    #[test]
    fn render_skips_overlay_without_path() {
        let board = parse_board("2\n0t\nt0").unwrap();
        let text = Crossing::solve(board).render(true);
        assert!(text.contains("best path: none"));
        assert!(!text.contains("path on board"));
    }

    #[test]
    fn run_writes_summary() {
        let dir = scratch_dir("run");
        let input = dir.join("in.txt");
        let output = dir.join("out.txt");
        fs::write(&input, "3\n000\n0t0\n000\n").unwrap();
        let cli = Cli {
            input,
            output: output.clone(),
            no_overlay: true,
        };
        let report = run(&cli).unwrap();
        assert!(!report.contains("path on board"));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "best path: EESS\ntotal damage: 40\n"
        );
    }

    #[test]
    fn run_rejects_malformed_board() {
        let dir = scratch_dir("bad");
        let input = dir.join("in.txt");
        fs::write(&input, "3\n000\n0x0\n000\n").unwrap();
        let cli = Cli {
            input,
            output: dir.join("out.txt"),
            no_overlay: false,
        };
        let err = run(&cli).unwrap_err();
        assert_eq!(err.to_string(), BAD_INPUT);
    }
}
