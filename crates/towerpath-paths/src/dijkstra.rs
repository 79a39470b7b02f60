use std::collections::BinaryHeap;

use towerpath_core::{Board, Path, Point, Range};

use crate::damage::DamageField;
use crate::pather::DamagePather;
use crate::search::{NO_PARENT, NodeRef, SearchResult, SearchSpace, UNREACHABLE};
use crate::traits::WeightedPather;

/// Find the crossing from the top-left to the bottom-right corner of `board`
/// that takes the least total damage.
///
/// If either corner holds a tower, or towers wall the goal off, the result
/// has no path and an [`UNREACHABLE`] cost.
pub fn find_minimum_damage_path(board: &Board, field: &DamageField) -> SearchResult {
    find_path_between(board, field, board.start(), board.goal())
}

/// Like [`find_minimum_damage_path`], between arbitrary cells.
///
/// The returned path is relative to `from`. Endpoints that are off the board
/// or hold a tower yield no path.
pub fn find_path_between(
    board: &Board,
    field: &DamageField,
    from: Point,
    to: Point,
) -> SearchResult {
    let pather = DamagePather::new(board, field);
    if !pather.passable(from) || !pather.passable(to) {
        log::debug!("no path from {from} to {to}: endpoint is blocked");
        return SearchResult::unreachable();
    }
    dijkstra_path(&pather, board.range(), from, to)
}

/// Dijkstra's shortest path from `from` to `to` inside `rng`.
///
/// Frontier entries with equal cost pop in row-major order and neighbours
/// are relaxed in the order the pather reports them, so equal-cost ties are
/// always resolved the same way. Stale frontier entries are skipped rather
/// than decreased in place.
///
/// `from` is assumed enterable; the pather alone decides which neighbours
/// are.
pub fn dijkstra_path<P: WeightedPather>(
    pather: &P,
    rng: Range,
    from: Point,
    to: Point,
) -> SearchResult {
    let mut space = SearchSpace::new(rng);
    let (Some(start_idx), Some(goal_idx)) = (space.idx(from), space.idx(to)) else {
        return SearchResult::unreachable();
    };

    space.best[start_idx] = 0;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: start_idx,
        cost: 0,
    });

    let mut nbuf: Vec<Point> = Vec::with_capacity(4);
    let mut pops: usize = 0;
    let mut pushes: usize = 1;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search None;
        };
        let ci = current.idx;

        // Skip stale entries.
        if current.cost > space.best[ci] {
            continue;
        }
        pops += 1;

        if ci == goal_idx {
            break 'search Some(current.cost);
        }

        let cp = space.point(ci);
        log::trace!("expand {cp} at cost {}", current.cost);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            let tentative = current.cost.saturating_add(u64::from(pather.cost(cp, np)));
            if tentative >= space.best[ni] {
                continue;
            }
            space.best[ni] = tentative;
            space.parent[ni] = ci;
            open.push(NodeRef {
                idx: ni,
                cost: tentative,
            });
            pushes += 1;
        }
    };

    let Some(total_cost) = found else {
        log::debug!("no path from {from} to {to} ({pops} expansions, {pushes} pushes)");
        return SearchResult::unreachable();
    };

    debug_assert_eq!(space.parent[start_idx], NO_PARENT);
    let points = space.backtrack(goal_idx);
    let Some(path) = Path::from_points(&points) else {
        log::warn!("pather reported a non-cardinal neighbour; discarding path to {to}");
        return SearchResult::unreachable();
    };

    log::debug!(
        "path from {from} to {to}: {} moves, damage {total_cost} ({pops} expansions, {pushes} pushes)",
        path.len()
    );
    SearchResult::found(path, total_cost)
}
