//! Wall-following walk around the component of a starting cell.
//!
//! The walker keeps a wall on its counter-clockwise hand and yields one
//! [`Step`] per transition, so callers can interleave their own logic
//! (counting moves, stopping early) with the walk. A walk always ends on the
//! cursor it started from, and a fresh walker on an unchanged maze repeats
//! the exact same steps.

use crate::maze::{Direction, Maze};

/// How the cursor changed in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// The counter-clockwise side is open; the cursor turns into it next.
    Left,
    /// The cursor moved one cell forward.
    Straight,
    /// The way ahead is closed; the cursor turns clockwise next.
    Right,
    /// The counter-clockwise side is closed; the cursor touches that wall.
    Touch,
}

impl Turn {
    /// Signed turn value: -1, 0, +1, and +2 for a touch.
    pub fn value(self) -> i8 {
        match self {
            Turn::Left => -1,
            Turn::Straight => 0,
            Turn::Right => 1,
            Turn::Touch => 2,
        }
    }
}

/// Position and heading of the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub cell: (usize, usize),
    pub facing: Direction,
}

/// One emitted transition. For `Left` and `Right`, `facing` is the heading
/// before the rotation; for `Straight`, `cell` is the cell just entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub cell: (usize, usize),
    pub facing: Direction,
    pub turn: Turn,
}

impl Step {
    /// The cell a `Straight` step came from.
    pub fn previous_cell(&self) -> (usize, usize) {
        self.facing.opposite().step(self.cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Inspect the counter-clockwise side.
    Probe,
    /// A `Left` was emitted: rotate and move.
    TurnedLeft,
    /// A `Touch` was emitted: move forward or turn right.
    Touched,
    /// A `Straight` was emitted: check for closure.
    Moved,
    /// A `Right` was emitted: rotate, then check for closure.
    TurnedRight,
    Done,
}

pub struct BoundaryWalker<'a> {
    maze: &'a Maze,
    start: Cursor,
    cursor: Cursor,
    state: State,
}

impl<'a> BoundaryWalker<'a> {
    /// Starts a walk at `cell`. If the counter-clockwise side of `facing` is
    /// open, the heading is first turned clockwise until a wall is on that
    /// side; [`BoundaryWalker::start`] reports the heading actually used.
    ///
    /// # Panics
    /// If `cell` is out of bounds, or open on all four sides.
    pub fn new(maze: &'a Maze, cell: (usize, usize), facing: Direction) -> Self {
        assert!(
            maze.is_in_bounds(cell),
            "walk start {cell:?} is out of bounds"
        );
        assert!(
            maze.nr_walls(cell) > 0,
            "walk start {cell:?} has no wall to follow"
        );
        let mut facing = facing;
        while !maze.has_wall(cell, facing.counter_clockwise()) {
            facing = facing.clockwise();
        }
        let start = Cursor { cell, facing };
        BoundaryWalker {
            maze,
            start,
            cursor: start,
            state: State::Probe,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn start(&self) -> Cursor {
        self.start
    }

    /// True once the walk has returned to its start.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    fn emit(&self, turn: Turn) -> Step {
        Step {
            cell: self.cursor.cell,
            facing: self.cursor.facing,
            turn,
        }
    }

    fn advance(&mut self) -> Step {
        self.cursor.cell = self.cursor.facing.step(self.cursor.cell);
        self.state = State::Moved;
        self.emit(Turn::Straight)
    }

    /// Performs transitions until the next step is emitted.
    pub fn step(&mut self) -> Option<Step> {
        loop {
            match self.state {
                State::Probe => {
                    let side = self.cursor.facing.counter_clockwise();
                    return if self.maze.has_wall(self.cursor.cell, side) {
                        self.state = State::Touched;
                        Some(self.emit(Turn::Touch))
                    } else {
                        self.state = State::TurnedLeft;
                        Some(self.emit(Turn::Left))
                    };
                }
                State::TurnedLeft => {
                    self.cursor.facing = self.cursor.facing.counter_clockwise();
                    return Some(self.advance());
                }
                State::Touched => {
                    return if self.maze.has_wall(self.cursor.cell, self.cursor.facing) {
                        self.state = State::TurnedRight;
                        Some(self.emit(Turn::Right))
                    } else {
                        Some(self.advance())
                    };
                }
                State::Moved | State::TurnedRight => {
                    if self.state == State::TurnedRight {
                        self.cursor.facing = self.cursor.facing.clockwise();
                    }
                    self.state = if self.cursor == self.start {
                        State::Done
                    } else {
                        State::Probe
                    };
                }
                State::Done => return None,
            }
        }
    }
}

impl Iterator for BoundaryWalker<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze, get_rng};

    fn corridor() -> Maze {
        let mut maze = Maze::new(3, 1).unwrap();
        maze.undefined_to_wall();
        maze.open((0, 0), Direction::East);
        maze.open((1, 0), Direction::East);
        maze
    }

    #[test]
    fn test_single_cell_walk() {
        let maze = Maze::new(1, 1).unwrap();
        let turns = maze
            .walk((0, 0), Direction::East)
            .map(|s| s.turn)
            .collect::<Vec<_>>();
        assert_eq!(
            turns,
            [Turn::Touch, Turn::Right].repeat(4),
            "a closed cell is touched and turned on all four sides"
        );
    }

    #[test]
    fn test_corridor_walk() {
        let maze = corridor();
        let straights = maze
            .walk((0, 0), Direction::East)
            .filter(|s| s.turn == Turn::Straight)
            .map(|s| s.cell)
            .collect::<Vec<_>>();
        assert_eq!(straights, vec![(1, 0), (2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn test_left_turn_reports_heading_before_rotation() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.undefined_to_wall();
        maze.open((0, 0), Direction::South);
        maze.open((0, 1), Direction::East);
        let mut walk = maze.walk((0, 0), Direction::East);
        let left = walk.find(|s| s.turn == Turn::Left).unwrap();
        assert_eq!(left.cell, (0, 1));
        assert_eq!(left.facing, Direction::South);
        let next = walk.next().unwrap();
        assert_eq!(next.turn, Turn::Straight);
        assert_eq!((next.cell, next.facing), ((1, 1), Direction::East));
    }

    #[test]
    fn test_walk_is_restartable_and_closed() {
        let mut rng = get_rng(Some(7));
        let mut maze = Maze::new(9, 6).unwrap();
        generate_maze(&mut maze, Generator::Random, &mut rng).unwrap();

        // Every cursor is probed at most once and a probe emits at most two
        // steps. Border sides count too, so a 1x1 maze already takes 8.
        let bound = 8 * maze.cell_count();
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                for facing in Direction::ALL {
                    if !maze.has_wall((x, y), facing.counter_clockwise()) {
                        continue;
                    }
                    let mut walker = maze.walk((x, y), facing);
                    assert_eq!(walker.start(), Cursor { cell: (x, y), facing });
                    let first = walker.by_ref().take(bound + 1).collect::<Vec<_>>();
                    assert!(walker.is_done(), "walk from {:?} did not close", (x, y));
                    assert_eq!(walker.cursor(), walker.start());
                    assert!(first.len() <= bound);
                    let second = maze.walk((x, y), facing).collect::<Vec<_>>();
                    assert_eq!(first, second);
                }
            }
        }
    }

    #[test]
    fn test_open_left_side_start_is_turned() {
        let mut maze = Maze::new(2, 1).unwrap();
        maze.undefined_to_wall();
        maze.open((0, 0), Direction::East);

        let mut walker = maze.walk((0, 0), Direction::South);
        assert_eq!(walker.start().facing, Direction::West);
        let steps = walker.by_ref().take(100).count();
        assert!(walker.is_done());
        assert_eq!(walker.cursor(), walker.start());
        assert_eq!(steps, maze.walk((0, 0), Direction::West).count());
    }

    #[test]
    #[should_panic]
    fn test_start_without_walls_panics() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.undefined_to_wall();
        for dir in Direction::ALL {
            maze.open((1, 1), dir);
        }
        maze.walk((1, 1), Direction::East);
    }

    #[test]
    fn test_previous_cell() {
        let maze = corridor();
        let step = maze
            .walk((0, 0), Direction::East)
            .find(|s| s.turn == Turn::Straight)
            .unwrap();
        assert_eq!(step.previous_cell(), (0, 0));
    }
}
