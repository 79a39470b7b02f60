use towerpath_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the 8 surrounding neighbors of a grid point, filtered by a
/// predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8 surrounding neighbors of `p`, keeping only those for
    /// which `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_8() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_apply() {
        let mut nb = Neighbors::new();
        let in_bounds = |q: Point| q.x >= 0 && q.y >= 0 && q.x < 3 && q.y < 3;
        assert_eq!(nb.all(Point::ZERO, in_bounds).len(), 3);
        assert_eq!(nb.all(Point::new(1, 1), in_bounds).len(), 8);
        assert_eq!(nb.all(Point::new(1, 0), in_bounds).len(), 5);
    }
}
