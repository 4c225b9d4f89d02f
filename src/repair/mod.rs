//! Turning arbitrary edge assignments into perfect mazes.
//!
//! [`fix`] walks the contour of one component, tallies how often each edge is
//! crossed or touched, and flips one edge seen from a single side only. Such
//! an edge is either a passage on a cycle or a wall between two components.
//! The pass repeats until the walk covers a spanning tree.

mod crosses;

pub use crosses::remove_crosses;

use rand::Rng;

use crate::error::{MazeError, Result};
use crate::maze::{Direction, Edge, Maze, Orientation, grid::Grid};
use crate::walker::{Cursor, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairOptions {
    /// Flips allowed before giving up.
    pub max_iterations: usize,
}

impl RepairOptions {
    pub const ITERATIONS_PER_CELL: usize = 64;
    pub const BASE_ITERATIONS: usize = 1024;

    /// Budget scaled to the size of `maze`.
    pub fn for_maze(maze: &Maze) -> Self {
        RepairOptions {
            max_iterations: Self::ITERATIONS_PER_CELL * maze.cell_count() + Self::BASE_ITERATIONS,
        }
    }

    pub fn with_max_iterations(max_iterations: usize) -> Self {
        RepairOptions { max_iterations }
    }
}

/// Per-edge counters, one per physical internal edge.
struct EdgeTally {
    vertical: Grid<u8>,
    horizontal: Grid<u8>,
}

impl EdgeTally {
    fn new(maze: &Maze) -> Self {
        EdgeTally {
            vertical: Grid::new(maze.width() - 1, maze.height(), 0),
            horizontal: Grid::new(maze.width(), maze.height() - 1, 0),
        }
    }

    fn clear(&mut self) {
        self.vertical.fill(0);
        self.horizontal.fill(0);
    }

    fn bump(&mut self, edge: Edge) {
        let slot = match edge.orientation {
            Orientation::Vertical => &mut self.vertical[edge.from],
            Orientation::Horizontal => &mut self.horizontal[edge.from],
        };
        *slot = slot.saturating_add(1);
    }

    fn get(&self, edge: Edge) -> u8 {
        match edge.orientation {
            Orientation::Vertical => self.vertical[edge.from],
            Orientation::Horizontal => self.horizontal[edge.from],
        }
    }
}

/// Finds a walk start with a wall on the counter-clockwise hand, scanning
/// row by row from a random cell.
fn random_walk_start(maze: &Maze, rng: &mut impl Rng) -> Cursor {
    let (width, height) = (maze.width(), maze.height());
    let mut cell = (rng.random_range(0..width), rng.random_range(0..height));
    let mut facing = Direction::from_index(rng.random_range(0..4));

    // Terminates: the border guarantees (0, 0) has walls
    while maze.nr_walls(cell) == 0 {
        cell.0 += 1;
        if cell.0 == width {
            cell.0 = 0;
            cell.1 = (cell.1 + 1) % height;
        }
    }
    while !maze.has_wall(cell, facing) {
        facing = facing.clockwise();
    }
    Cursor {
        cell,
        facing: facing.clockwise(),
    }
}

/// Repairs `maze` into a perfect maze by flipping edges.
///
/// Returns the number of flips; a maze that is already perfect is left
/// untouched and returns 0. Hard walls are never flipped. `Undefined` edges
/// behave as walls and are resolved to walls on success.
///
/// # Errors
/// * `RepairNonConvergence` once `options.max_iterations` flips did not suffice
/// * `RepairStuck` when only hard walls could reconnect the maze
pub fn fix(maze: &mut Maze, rng: &mut impl Rng, options: &RepairOptions) -> Result<usize> {
    let target = 2 * maze.tree_edge_count();
    let mut tally = EdgeTally::new(maze);
    let mut flips = 0;

    loop {
        tally.clear();
        let start = random_walk_start(maze, rng);

        let mut straight = 0;
        for step in maze.walk(start.cell, start.facing) {
            match step.turn {
                Turn::Straight => {
                    if let Some(edge) = maze.edge_towards(step.cell, step.facing.opposite()) {
                        tally.bump(edge);
                    }
                    straight += 1;
                }
                Turn::Touch => {
                    if let Some(edge) =
                        maze.edge_towards(step.cell, step.facing.counter_clockwise())
                    {
                        tally.bump(edge);
                    }
                }
                Turn::Left | Turn::Right => {}
            }
        }

        if straight == target {
            maze.undefined_to_wall();
            tracing::debug!("[repair] perfect after {} flips", flips);
            return Ok(flips);
        }
        if flips >= options.max_iterations {
            tracing::warn!(
                "[repair] giving up after {} flips ({} of {} edge crossings)",
                flips,
                straight,
                target
            );
            return Err(MazeError::RepairNonConvergence { iterations: flips });
        }

        let candidates = maze
            .edges()
            .filter(|&edge| tally.get(edge) == 1 && !maze[edge].is_hard())
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            return Err(MazeError::RepairStuck);
        }
        let edge = candidates[rng.random_range(0..candidates.len())];
        maze.flip_edge(edge);
        flips += 1;
    }
}
