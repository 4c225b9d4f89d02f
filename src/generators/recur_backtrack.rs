use rand::Rng;

use crate::maze::{Direction, Maze, grid::Grid};

/// Randomized depth-first carving from `(0, 0)`.
///
/// Neighbors behind a hard wall are never candidates, so stamped walls shape
/// the result without being crossed.
pub fn recursive_backtrack(maze: &mut Maze, rng: &mut impl Rng) {
    maze.reset();

    let mut visited = Grid::new(maze.width(), maze.height(), false);
    let start = (0, 0);
    visited[start] = true;

    // The stack will keep only cells already connected to the start
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = Direction::ALL
            .into_iter()
            .filter(|&dir| !maze.wall(cell, dir).is_hard())
            .filter_map(|dir| maze.neighbor(cell, dir).map(|n| (dir, n)))
            .filter(|&(_, n)| !visited[n])
            .collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let (dir, neighbor) = neighbors[rng.random_range(0..neighbors.len())];
            maze.open(cell, dir);
            visited[neighbor] = true;
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }

    maze.undefined_to_wall();
}
