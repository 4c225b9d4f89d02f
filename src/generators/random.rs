use rand::{Rng, seq::index};

use crate::error::Result;
use crate::maze::{Edge, Maze};
use crate::repair::{RepairOptions, fix};

fn removable_edges(maze: &Maze) -> Vec<Edge> {
    maze.edges().filter(|&edge| !maze[edge].is_hard()).collect()
}

/// Flips a fair coin for every removable edge, then repairs the result.
/// Returns the number of repair flips.
pub fn random_then_repair(
    maze: &mut Maze,
    rng: &mut impl Rng,
    options: &RepairOptions,
) -> Result<usize> {
    maze.reset();
    maze.fill_walls();

    for edge in removable_edges(maze) {
        if rng.random_bool(0.5) {
            maze.open_edge(edge);
        }
    }

    fix(maze, rng, options)
}

/// Opens exactly as many removable edges as a spanning tree has, chosen
/// without replacement, then repairs the result.
pub fn random_exact_then_repair(
    maze: &mut Maze,
    rng: &mut impl Rng,
    options: &RepairOptions,
) -> Result<usize> {
    maze.reset();
    maze.fill_walls();

    let edges = removable_edges(maze);
    let amount = maze.tree_edge_count().min(edges.len());
    for idx in index::sample(&mut *rng, edges.len(), amount).iter() {
        maze.open_edge(edges[idx]);
    }

    fix(maze, rng, options)
}

/// Grows a spanning tree purely through repair, starting from a fully walled maze.
pub fn trees(maze: &mut Maze, rng: &mut impl Rng, options: &RepairOptions) -> Result<usize> {
    maze.reset();
    maze.fill_walls();
    fix(maze, rng, options)
}
