use towerpath_core::Point;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append the enterable neighbors of `p` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` onto the adjacent `to`.
    fn cost(&self, from: Point, to: Point) -> u32;
}
