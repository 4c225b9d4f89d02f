use std::collections::VecDeque;

use rand::Rng;

use crate::maze::{Direction, Maze, grid::Grid};

#[derive(Debug, Clone, Copy, PartialEq)]
enum WalkState {
    NotStarted,
    /// Direction taken the last time the current walk left this cell.
    Heading(Direction),
    Included,
}

/// Cells not yet in the tree, with O(1) removal of any member.
struct Pool {
    cells: Vec<(usize, usize)>,
    position: Grid<usize>,
}

impl Pool {
    fn new(maze: &Maze) -> Self {
        let cells = (0..maze.height())
            .flat_map(|y| (0..maze.width()).map(move |x| (x, y)))
            .collect::<Vec<_>>();
        let mut position = Grid::new(maze.width(), maze.height(), 0);
        cells
            .iter()
            .enumerate()
            .for_each(|(idx, &cell)| position[cell] = idx);
        Pool { cells, position }
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn pick(&self, rng: &mut impl Rng) -> (usize, usize) {
        self.cells[rng.random_range(0..self.cells.len())]
    }

    fn remove(&mut self, cell: (usize, usize)) {
        let idx = self.position[cell];
        self.cells.swap_remove(idx);
        if let Some(&moved) = self.cells.get(idx) {
            self.position[moved] = idx;
        }
    }
}

/// Directions a walk may take from `cell`: on the grid and not through a hard wall.
fn open_directions(maze: &Maze, cell: (usize, usize)) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| !maze.wall(cell, dir).is_hard())
        .collect()
}

/// Labels the regions that hard walls split the maze into.
fn label_regions(maze: &Maze) -> (Grid<usize>, usize) {
    let mut labels = Grid::new(maze.width(), maze.height(), usize::MAX);
    let mut count = 0;
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            if labels[(x, y)] != usize::MAX {
                continue;
            }
            labels[(x, y)] = count;
            let mut queue = VecDeque::from([(x, y)]);
            while let Some(cell) = queue.pop_front() {
                for dir in open_directions(maze, cell) {
                    let next = dir.step(cell);
                    if labels[next] == usize::MAX {
                        labels[next] = count;
                        queue.push_back(next);
                    }
                }
            }
            count += 1;
        }
    }
    (labels, count)
}

/// Wilson's algorithm: a uniformly random spanning tree built from
/// loop-erased random walks.
///
/// Every region sealed off by hard walls gets its own root, so a maze cut
/// apart by stamping comes out as a forest that `check()` rejects.
pub fn wilson(maze: &mut Maze, rng: &mut impl Rng) {
    maze.reset();

    let (regions, region_count) = label_regions(maze);
    if region_count > 1 {
        tracing::warn!(
            "[wilson] hard walls split the maze into {} regions",
            region_count
        );
    }
    let mut rooted = vec![false; region_count];
    let mut states = Grid::new(maze.width(), maze.height(), WalkState::NotStarted);
    let mut pool = Pool::new(maze);

    while !pool.is_empty() {
        let start = pool.pick(rng);
        if !rooted[regions[start]] {
            rooted[regions[start]] = true;
            states[start] = WalkState::Included;
            pool.remove(start);
            continue;
        }

        // Random walk until the tree is hit; revisiting a cell overwrites its
        // heading, which erases the loop
        let mut cell = start;
        while states[cell] != WalkState::Included {
            let directions = open_directions(maze, cell);
            let dir = directions[rng.random_range(0..directions.len())];
            states[cell] = WalkState::Heading(dir);
            cell = dir.step(cell);
        }

        // Replay the loop-erased path into the tree
        let mut cell = start;
        while let WalkState::Heading(dir) = states[cell] {
            maze.open(cell, dir);
            states[cell] = WalkState::Included;
            pool.remove(cell);
            cell = dir.step(cell);
        }
    }

    maze.undefined_to_wall();
}
