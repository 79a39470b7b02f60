use towerpath_core::{Board, Direction, Point};

use crate::damage::DamageField;
use crate::traits::{Pather, WeightedPather};

/// Walks a board in cardinal steps, paying the damage of every cell entered.
///
/// Towers and off-board points are never reported as neighbours.
#[derive(Clone, Copy, Debug)]
pub struct DamagePather<'a> {
    board: &'a Board,
    field: &'a DamageField,
}

impl<'a> DamagePather<'a> {
    pub fn new(board: &'a Board, field: &'a DamageField) -> Self {
        Self { board, field }
    }

    /// Whether a crossing may stand on `p`.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.board.is_free(p) && self.field.penalty(p).is_some()
    }
}

impl Pather for DamagePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in Direction::ALL {
            let n = p + d.delta();
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for DamagePather<'_> {
    fn cost(&self, _from: Point, to: Point) -> u32 {
        self.field.penalty(to).unwrap_or(u32::MAX)
    }
}
