//! Text front end for towerpath: reading boards and rendering results.

pub mod parse;
pub mod report;

pub use parse::{ParseError, load_board, parse_board};
pub use report::{render_board, render_damage_field, render_overlay, render_summary};
