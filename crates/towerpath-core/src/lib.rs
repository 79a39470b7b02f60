//! **towerpath-core** — board model shared by the towerpath crates.
//!
//! This crate provides the geometry primitives, the immutable square
//! [`Board`] of free and hazard tiles, and the cardinal [`Direction`] /
//! [`Path`] types produced by the path finder.

pub mod board;
pub mod direction;
pub mod geom;

pub use board::{Board, BoardError, Tile};
pub use direction::{Direction, Path};
pub use geom::{Point, Range};
