//! Histogram of pairwise path lengths in a perfect maze.
//!
//! A boundary walk from `(0, 0)` is an Euler tour of the tree: the first
//! straight step into a cell descends, every later one returns from a
//! finished child. Each cell keeps a chain of per-depth weights (how many
//! cells of its finished subtree sit at each depth below it). Returning from a
//! child folds the child's chain into the parent's, and right before the fold
//! every pair formed by one cell on each side is counted at the sum of their
//! depths. Every unordered pair is counted exactly once, at its lowest common
//! ancestor, without any per-pair search.
//!
//! Folding is small-into-large, but counting the cross pairs multiplies the
//! two chain lengths, so a merge costs `|child| * |parent|`. Bushy trees stay
//! close to linear; a long corridor degrades to O(n^2).

use crate::error::{MazeError, Result};
use crate::maze::{Direction, Maze, grid::Grid};
use crate::walker::Turn;

/// Per-depth weights, deepest first: the last entry is depth 0.
type Chain = Vec<u64>;

/// Folds `child` into `parent`, counting the pairs across the two into `dist`.
fn merge(mut child: Chain, parent: Chain, dist: &mut Vec<u64>) -> Chain {
    // Seen from the parent, the child's cells sit one level deeper
    child.push(0);

    let longest = child.len() + parent.len() - 1;
    if dist.len() < longest {
        dist.resize(longest, 0);
    }
    for (a_depth, &a_weight) in child.iter().rev().enumerate() {
        if a_weight == 0 {
            continue;
        }
        for (b_depth, &b_weight) in parent.iter().rev().enumerate() {
            dist[a_depth + b_depth] += a_weight * b_weight;
        }
    }

    // Pair up nodes from the shallow end, small into large
    let (mut long, short) = if child.len() > parent.len() {
        (child, parent)
    } else {
        (parent, child)
    };
    let offset = long.len() - short.len();
    long[offset..]
        .iter_mut()
        .zip(short.iter())
        .for_each(|(slot, weight)| *slot += weight);
    long
}

/// Returns `dist` where `dist[k]` is the number of unordered cell pairs at
/// path length `k`. `dist[0]` is always 0 and the last entry is nonzero
/// unless the maze is a single cell.
///
/// # Errors
/// `NotPerfect` if the passages do not form a spanning tree.
pub fn distance_histogram(maze: &Maze) -> Result<Vec<u64>> {
    if !maze.is_perfect() {
        return Err(MazeError::NotPerfect);
    }

    let mut chains: Grid<Chain> = Grid::new(maze.width(), maze.height(), vec![1]);
    let mut entered = Grid::new(maze.width(), maze.height(), false);
    entered[(0, 0)] = true;
    let mut dist = vec![0];

    for step in maze
        .walk((0, 0), Direction::East)
        .filter(|step| step.turn == Turn::Straight)
    {
        if !entered[step.cell] {
            entered[step.cell] = true;
            continue;
        }
        let child = std::mem::take(&mut chains[step.previous_cell()]);
        let parent = std::mem::take(&mut chains[step.cell]);
        chains[step.cell] = merge(child, parent, &mut dist);
    }

    while dist.len() > 1 && dist.last() == Some(&0) {
        dist.pop();
    }
    Ok(dist)
}

/// Aggregates of a distance histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSummary {
    pub pairs: u64,
    pub mean: f64,
    /// Longest path length, the diameter of the tree.
    pub diameter: usize,
}

impl DistanceSummary {
    pub fn from_histogram(dist: &[u64]) -> Self {
        let pairs = dist.iter().sum::<u64>();
        let total = dist
            .iter()
            .enumerate()
            .map(|(k, &count)| k as f64 * count as f64)
            .sum::<f64>();
        DistanceSummary {
            pairs,
            mean: if pairs == 0 { 0.0 } else { total / pairs as f64 },
            diameter: dist.iter().rposition(|&count| count > 0).unwrap_or(0),
        }
    }
}
