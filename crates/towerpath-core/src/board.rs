//! The [`Board`] type, an immutable square grid of [`Tile`]s.
//!
//! A board is fully populated: every point of `[0, n) × [0, n)` holds exactly
//! one tile. Boards are validated once at construction and never mutated, so
//! they can be shared by reference across any number of searches.

use std::fmt;

use crate::geom::{Point, Range};

/// Classification of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Passable cell.
    #[default]
    Free,
    /// A tower: impassable, and damages the eight cells around it.
    Hazard,
}

impl Tile {
    #[inline]
    pub fn is_hazard(self) -> bool {
        self == Tile::Hazard
    }
}

/// An immutable `n`×`n` grid of tiles stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    n: i32,
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board of side `n` from `n * n` row-major tiles.
    pub fn new(n: usize, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if n == 0 {
            return Err(BoardError::Empty);
        }
        let side = i32::try_from(n).map_err(|_| BoardError::TooLarge(n))?;
        let expected = n.checked_mul(n).ok_or(BoardError::TooLarge(n))?;
        if tiles.len() != expected {
            return Err(BoardError::TileCount {
                expected,
                found: tiles.len(),
            });
        }
        Ok(Self { n: side, tiles })
    }

    /// Build a board of side `n` by classifying every point with `f`.
    pub fn from_fn(n: usize, mut f: impl FnMut(Point) -> Tile) -> Result<Self, BoardError> {
        if n == 0 {
            return Err(BoardError::Empty);
        }
        let side = i32::try_from(n).map_err(|_| BoardError::TooLarge(n))?;
        let tiles = Range::square(side).iter().map(&mut f).collect();
        Self::new(n, tiles)
    }

    /// An `n`×`n` board with a hazard at each of the given points.
    ///
    /// Points outside the board are ignored.
    pub fn with_hazards(n: usize, hazards: &[Point]) -> Result<Self, BoardError> {
        Self::from_fn(n, |p| {
            if hazards.contains(&p) {
                Tile::Hazard
            } else {
                Tile::Free
            }
        })
    }

    /// Side length `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.n as usize
    }

    /// The `[0, n) × [0, n)` range covered by the board.
    #[inline]
    pub fn range(&self) -> Range {
        Range::square(self.n)
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// Top-left cell, where every crossing starts.
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// Bottom-right cell, where every crossing ends.
    #[inline]
    pub fn goal(&self) -> Point {
        Point::new(self.n - 1, self.n - 1)
    }

    /// Flat row-major index of `p`, or `None` if it is off the board.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.n as usize + p.x as usize)
    }

    /// Point at flat index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let n = self.n as usize;
        Point::new((idx % n) as i32, (idx / n) as i32)
    }

    /// Tile at `p`, or `None` if it is off the board.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.idx(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is on the board and holds a hazard.
    #[inline]
    pub fn is_hazard(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Hazard)
    }

    /// Whether `p` is on the board and passable.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Free)
    }

    /// All tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.n as usize)
    }

    /// Iterate over the positions of every hazard, row-major.
    pub fn hazards(&self) -> impl Iterator<Item = Point> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_hazard())
            .map(|(i, _)| self.point(i))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut st = serializer.serialize_struct("Board", 2)?;
        st.serialize_field("size", &self.size())?;
        st.serialize_field("tiles", &self.tiles)?;
        st.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            size: usize,
            tiles: Vec<Tile>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Board::new(raw.size, raw.tiles).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when constructing a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The side length was zero.
    Empty,
    /// The side length does not fit the coordinate space.
    TooLarge(usize),
    /// The number of tiles is not `n * n`.
    TileCount { expected: usize, found: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board: size must be at least 1"),
            Self::TooLarge(n) => write!(f, "board: size {n} is too large"),
            Self::TileCount { expected, found } => {
                write!(f, "board: expected {expected} tiles, found {found}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_size() {
        assert_eq!(Board::new(0, Vec::new()), Err(BoardError::Empty));
    }

    #[test]
    fn new_rejects_wrong_tile_count() {
        let err = Board::new(2, vec![Tile::Free; 3]).unwrap_err();
        assert_eq!(
            err,
            BoardError::TileCount {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn with_hazards_places_towers() {
        let b = Board::with_hazards(3, &[Point::new(1, 1), Point::new(2, 0)]).unwrap();
        assert_eq!(b.size(), 3);
        assert!(b.is_hazard(Point::new(1, 1)));
        assert!(b.is_hazard(Point::new(2, 0)));
        assert!(b.is_free(Point::new(0, 0)));
        assert_eq!(
            b.hazards().collect::<Vec<_>>(),
            vec![Point::new(2, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn off_board_points_are_neither_free_nor_hazard() {
        let b = Board::with_hazards(2, &[]).unwrap();
        let outside = Point::new(2, 0);
        assert_eq!(b.at(outside), None);
        assert!(!b.is_free(outside));
        assert!(!b.is_hazard(outside));
        assert_eq!(b.idx(Point::new(-1, 0)), None);
    }

    #[test]
    fn idx_and_point_are_inverse() {
        let b = Board::with_hazards(4, &[]).unwrap();
        for p in b.range() {
            let i = b.idx(p).unwrap();
            assert_eq!(b.point(i), p);
        }
        assert_eq!(b.idx(Point::new(1, 2)), Some(9));
    }

    #[test]
    fn corners() {
        let b = Board::with_hazards(5, &[]).unwrap();
        assert_eq!(b.start(), Point::new(0, 0));
        assert_eq!(b.goal(), Point::new(4, 4));
        let single = Board::with_hazards(1, &[]).unwrap();
        assert_eq!(single.start(), single.goal());
    }

    #[test]
    fn rows_are_row_major() {
        let b = Board::with_hazards(2, &[Point::new(1, 0)]).unwrap();
        let rows: Vec<_> = b.rows().collect();
        assert_eq!(rows[0], &[Tile::Free, Tile::Hazard]);
        assert_eq!(rows[1], &[Tile::Free, Tile::Free]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn deserialize_validates_tile_count() {
        let json = r#"{"size":2,"tiles":["Free","Hazard","Free"]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn board_round_trip() {
        let b = Board::with_hazards(3, &[Point::new(0, 2)]).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
