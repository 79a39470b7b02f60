//! Per-cell damage derived from tower placement.

use towerpath_core::{Board, Point, Range};

use crate::neighbors::Neighbors;

/// Damage a single tower deals to each of the eight cells around it.
pub const TOWER_DAMAGE: u32 = 10;

/// Damage charged for entering a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Damage {
    /// The cell holds a tower and can never be entered.
    Impassable,
    /// Free cell; the value is the sum of every adjacent tower's damage.
    Penalty(u32),
}

impl Damage {
    /// The penalty, or `None` for impassable cells.
    #[inline]
    pub fn penalty(self) -> Option<u32> {
        match self {
            Damage::Impassable => None,
            Damage::Penalty(v) => Some(v),
        }
    }
}

/// Dense row-major damage map with the same extent as its board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DamageField {
    n: i32,
    cells: Vec<Damage>,
}

impl DamageField {
    /// Side length `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.n as usize
    }

    #[inline]
    pub fn range(&self) -> Range {
        Range::square(self.n)
    }

    /// Damage at `p`, or `None` if `p` lies outside the field.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Damage> {
        if !self.range().contains(p) {
            return None;
        }
        self.cells
            .get(p.y as usize * self.n as usize + p.x as usize)
            .copied()
    }

    /// Penalty for entering `p`, or `None` if it is impassable or outside.
    #[inline]
    pub fn penalty(&self, p: Point) -> Option<u32> {
        self.at(p).and_then(Damage::penalty)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Damage] {
        &self.cells
    }

    /// Iterate over the rows of the field, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Damage]> {
        self.cells.chunks(self.n.max(1) as usize)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DamageField {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct Raw {
            n: i32,
            cells: Vec<Damage>,
        }
        let raw = Raw::deserialize(deserializer)?;
        if raw.n < 1 {
            return Err(D::Error::custom("damage field: size must be at least 1"));
        }
        let side = raw.n as usize;
        let expected = side
            .checked_mul(side)
            .ok_or_else(|| D::Error::custom(format!("damage field: size {side} is too large")))?;
        if raw.cells.len() != expected {
            return Err(D::Error::custom(format!(
                "damage field: expected {expected} cells, found {}",
                raw.cells.len()
            )));
        }
        Ok(Self {
            n: raw.n,
            cells: raw.cells,
        })
    }
}

/// Compute the damage field of `board`.
///
/// Towers become [`Damage::Impassable`]. Every tower then adds
/// [`TOWER_DAMAGE`] to each free in-bounds cell among its eight neighbours,
/// so a cell next to `k` towers ends up with `k * TOWER_DAMAGE`.
pub fn build_damage_field(board: &Board) -> DamageField {
    let mut cells: Vec<Damage> = board
        .tiles()
        .iter()
        .map(|t| {
            if t.is_hazard() {
                Damage::Impassable
            } else {
                Damage::Penalty(0)
            }
        })
        .collect();

    let mut nb = Neighbors::new();
    for tower in board.hazards() {
        for &p in nb.all(tower, |q| board.is_free(q)) {
            let Some(i) = board.idx(p) else {
                continue;
            };
            if let Damage::Penalty(v) = &mut cells[i] {
                *v += TOWER_DAMAGE;
            }
        }
    }

    log::debug!(
        "damage field: {}x{} board, {} towers",
        board.size(),
        board.size(),
        board.hazards().count()
    );

    DamageField {
        n: board.size() as i32,
        cells,
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn field_round_trip() {
        let board = Board::with_hazards(3, &[Point::new(1, 1)]).unwrap();
        let f = build_damage_field(&board);
        let json = serde_json::to_string(&f).unwrap();
        let back: DamageField = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }

    #[test]
    fn deserialize_validates_cell_count() {
        let json = r#"{"n":2,"cells":[{"Penalty":0},"Impassable",{"Penalty":10}]}"#;
        let err = serde_json::from_str::<DamageField>(json).unwrap_err();
        assert!(err.to_string().contains("expected 4 cells, found 3"));
    }

    #[test]
    fn deserialize_rejects_empty_field() {
        let json = r#"{"n":0,"cells":[]}"#;
        assert!(serde_json::from_str::<DamageField>(json).is_err());
    }
}
