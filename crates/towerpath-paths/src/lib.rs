//! Damage fields and damage-minimizing pathfinding on tower boards.
//!
//! The pipeline has two pure stages:
//!
//! - [`build_damage_field`] derives, from a [`Board`](towerpath_core::Board),
//!   the penalty charged for entering each free cell: [`TOWER_DAMAGE`] for
//!   every tower among its eight neighbours.
//! - [`find_minimum_damage_path`] runs Dijkstra from the top-left to the
//!   bottom-right corner using cardinal moves only, with the damage field as
//!   the cost of entering a cell and towers as walls.
//!
//! Neither stage keeps state between calls, so a board and its field can be
//! shared by reference across as many searches as needed.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | cost of entering a neighbour |

mod damage;
mod dijkstra;
mod neighbors;
mod pather;
mod search;
mod traits;

pub use damage::{Damage, DamageField, TOWER_DAMAGE, build_damage_field};
pub use dijkstra::{dijkstra_path, find_minimum_damage_path, find_path_between};
pub use neighbors::Neighbors;
pub use pather::DamagePather;
pub use search::{SearchResult, UNREACHABLE};
pub use traits::{Pather, WeightedPather};
