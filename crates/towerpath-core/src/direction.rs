//! Cardinal moves and the [`Path`] built from them.

use std::fmt;

use crate::geom::Point;

/// A cardinal move on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward decreasing row indices.
    North,
    /// Toward increasing row indices.
    South,
    /// Toward increasing column indices.
    East,
    /// Toward decreasing column indices.
    West,
}

impl Direction {
    /// Every direction, in the order neighbours are explored.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset of the move.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::South => Point::new(0, 1),
            Direction::East => Point::new(1, 0),
            Direction::West => Point::new(-1, 0),
        }
    }

    /// The direction leading from `from` to the adjacent `to`, if any.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let d = to - from;
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }

    /// One-letter code used in reports.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An ordered sequence of cardinal moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    moves: Vec<Direction>,
}

impl Path {
    /// The path with no moves.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Build a path from a chain of adjacent points.
    ///
    /// Returns `None` if two consecutive points are not cardinal neighbours.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        points
            .windows(2)
            .map(|w| Direction::between(w[0], w[1]))
            .collect::<Option<Vec<_>>>()
            .map(|moves| Self { moves })
    }

    /// Replay the moves from `start`, yielding every visited point
    /// including `start` itself.
    pub fn points(&self, start: Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.moves.len() + 1);
        let mut cur = start;
        out.push(cur);
        for d in &self.moves {
            cur = cur + d.delta();
            out.push(cur);
        }
        out
    }

    /// The point reached after replaying every move from `start`.
    pub fn end(&self, start: Point) -> Point {
        self.moves.iter().fold(start, |p, d| p + d.delta())
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.moves {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_adjacent_points() {
        let p = Point::new(2, 2);
        for d in Direction::ALL {
            assert_eq!(Direction::between(p, p + d.delta()), Some(d));
        }
        assert_eq!(Direction::between(p, Point::new(3, 3)), None);
        assert_eq!(Direction::between(p, p), None);
    }

    #[test]
    fn letters_follow_exploration_order() {
        let letters: String = Direction::ALL.iter().map(|d| d.letter()).collect();
        assert_eq!(letters, "NSEW");
        assert_eq!(Direction::West.to_string(), "W");
    }

    #[test]
    fn path_replay() {
        let path: Path = [Direction::East, Direction::South, Direction::South]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "ESS");
        assert_eq!(
            path.points(Point::ZERO),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2)
            ]
        );
        assert_eq!(path.end(Point::ZERO), Point::new(1, 2));
    }

    #[test]
    fn from_points_rejects_gaps() {
        let ok = Path::from_points(&[Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]);
        assert_eq!(ok.map(|p| p.to_string()), Some("SE".to_string()));
        assert!(Path::from_points(&[Point::new(0, 0), Point::new(2, 0)]).is_none());
    }

    #[test]
    fn empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
        assert_eq!(path.end(Point::new(3, 1)), Point::new(3, 1));
        assert_eq!(path.points(Point::ZERO), vec![Point::ZERO]);
    }
}
