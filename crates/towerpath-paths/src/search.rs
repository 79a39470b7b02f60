use towerpath_core::{Path, Point, Range};

/// Sentinel cost meaning "unreachable": the infinite total damage reported
/// when no crossing exists.
///
/// Totals are accumulated in `u64` from `u32` step costs, so no reachable
/// route on an addressable board sums to this value.
pub const UNREACHABLE: u64 = u64::MAX;

/// Outcome of one damage-minimizing search.
///
/// An unreachable goal is an ordinary outcome, not an error: `path` is
/// `None` and `total_cost` is [`UNREACHABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Option<Path>,
    pub total_cost: u64,
}

impl SearchResult {
    pub fn found(path: Path, total_cost: u64) -> Self {
        Self {
            path: Some(path),
            total_cost,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            path: None,
            total_cost: UNREACHABLE,
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }

    /// The total damage, or `None` if there is no path.
    #[inline]
    pub fn cost(&self) -> Option<u64> {
        self.path.as_ref().map(|_| self.total_cost)
    }
}

// ---------------------------------------------------------------------------
// Internal frontier entry
// ---------------------------------------------------------------------------

/// Frontier entry, ordered for use in `BinaryHeap` so that the lowest cost
/// pops first and equal costs pop in row-major order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Working state for a single search over a rectangle: best-known cost and
/// parent link per cell. Created fresh for every search and dropped with it.
pub(crate) struct SearchSpace {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) best: Vec<u64>,
    pub(crate) parent: Vec<usize>,
}

impl SearchSpace {
    pub(crate) fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            best: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// Follow parent links back from `goal` and return the visited points,
    /// start first.
    pub(crate) fn backtrack(&self, goal: usize) -> Vec<Point> {
        let mut points = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            points.push(self.point(ci));
            ci = self.parent[ci];
        }
        points.reverse();
        points
    }
}
