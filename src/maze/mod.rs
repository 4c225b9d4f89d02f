mod direction;
pub mod edge;
pub mod grid;

pub use direction::Direction;
pub use edge::{Edge, EdgeState};
use grid::Grid;

use crate::error::{MazeError, Result};
use crate::walker::{BoundaryWalker, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A `width x height` grid of cells separated by edges.
///
/// Vertical edges live in a `(width-1) x height` grid, horizontal edges in a
/// `width x (height-1)` grid. Everything beyond the border reads as a hard wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    vertical: Grid<EdgeState>,
    horizontal: Grid<EdgeState>,
    width: usize,
    height: usize,
}

impl Maze {
    /// Creates a new maze with every internal edge `Undefined`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Maze {
            vertical: Grid::new(width - 1, height, EdgeState::Undefined),
            horizontal: Grid::new(width, height - 1, EdgeState::Undefined),
            width,
            height,
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the width of the maze in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of passages a perfect maze of this size has.
    pub fn tree_edge_count(&self) -> usize {
        self.cell_count() - 1
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, cell: (usize, usize)) -> bool {
        cell.0 < self.width && cell.1 < self.height
    }

    fn assert_in_bounds(&self, cell: (usize, usize)) {
        assert!(
            self.is_in_bounds(cell),
            "cell {cell:?} is out of bounds for a {}x{} maze",
            self.width,
            self.height
        );
    }

    /// Returns the internal edge on side `dir` of `cell`, or `None` on the border.
    ///
    /// # Panics
    /// If `cell` is out of bounds.
    pub fn edge_towards(&self, cell: (usize, usize), dir: Direction) -> Option<Edge> {
        self.assert_in_bounds(cell);
        let (x, y) = cell;
        match dir {
            Direction::East => (x + 1 < self.width).then(|| Edge::vertical((x, y))),
            Direction::South => (y + 1 < self.height).then(|| Edge::horizontal((x, y))),
            Direction::West => (x > 0).then(|| Edge::vertical((x - 1, y))),
            Direction::North => (y > 0).then(|| Edge::horizontal((x, y - 1))),
        }
    }

    /// Returns the neighboring cell on side `dir`, or `None` on the border.
    pub fn neighbor(&self, cell: (usize, usize), dir: Direction) -> Option<(usize, usize)> {
        self.edge_towards(cell, dir).map(|_| dir.step(cell))
    }

    /// Edge state on side `dir` of `cell`, `HardWall` on the border.
    pub fn wall(&self, cell: (usize, usize), dir: Direction) -> EdgeState {
        self.edge_towards(cell, dir)
            .map_or(EdgeState::HardWall, |edge| self[edge])
    }

    /// True unless side `dir` of `cell` is a passage.
    pub fn has_wall(&self, cell: (usize, usize), dir: Direction) -> bool {
        self.wall(cell, dir).is_closed()
    }

    /// Number of closed sides of `cell`, border included.
    pub fn nr_walls(&self, cell: (usize, usize)) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.has_wall(cell, dir))
            .count()
    }

    pub fn degree(&self, cell: (usize, usize)) -> usize {
        4 - self.nr_walls(cell)
    }

    /// Opens side `dir` of `cell`.
    ///
    /// # Returns
    /// `true` if the edge is a passage afterwards, `false` if it is a hard wall
    ///
    /// # Panics
    /// If `cell` is out of bounds or `dir` points out of the maze.
    pub fn open(&mut self, cell: (usize, usize), dir: Direction) -> bool {
        let edge = self.border_checked(cell, dir);
        self.open_edge(edge)
    }

    /// Closes side `dir` of `cell`. Hard walls stay hard.
    ///
    /// # Panics
    /// If `cell` is out of bounds or `dir` points out of the maze.
    pub fn close(&mut self, cell: (usize, usize), dir: Direction) {
        let edge = self.border_checked(cell, dir);
        self.close_edge(edge);
    }

    fn border_checked(&self, cell: (usize, usize), dir: Direction) -> Edge {
        match self.edge_towards(cell, dir) {
            Some(edge) => edge,
            None => panic!("Cannot change the border wall {dir} of {cell:?}"),
        }
    }

    /// Sets `edge` to `Passage` unless it is a hard wall.
    pub fn open_edge(&mut self, edge: Edge) -> bool {
        let slot = self.slot_mut(edge);
        if slot.is_hard() {
            return false;
        }
        *slot = EdgeState::Passage;
        true
    }

    /// Sets `edge` to `Wall` unless it is a hard wall.
    pub fn close_edge(&mut self, edge: Edge) {
        let slot = self.slot_mut(edge);
        if !slot.is_hard() {
            *slot = EdgeState::Wall;
        }
    }

    /// Toggles `edge` between `Passage` and `Wall`; `Undefined` counts as a wall.
    /// Returns `false` and leaves hard walls untouched.
    pub fn flip_edge(&mut self, edge: Edge) -> bool {
        let slot = self.slot_mut(edge);
        *slot = match *slot {
            EdgeState::HardWall => return false,
            EdgeState::Passage => EdgeState::Wall,
            EdgeState::Wall | EdgeState::Undefined => EdgeState::Passage,
        };
        true
    }

    /// Turns `edge` into a permanent wall. Reserved for stamping.
    pub(crate) fn set_hard_wall(&mut self, edge: Edge) {
        *self.slot_mut(edge) = EdgeState::HardWall;
    }

    fn slot_mut(&mut self, edge: Edge) -> &mut EdgeState {
        match edge.orientation {
            Orientation::Vertical => &mut self.vertical[edge.from],
            Orientation::Horizontal => &mut self.horizontal[edge.from],
        }
    }

    /// Iterates all internal edges, vertical ones first.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let vertical = self.vertical.iter().map(|(from, _)| Edge::vertical(from));
        let horizontal = self
            .horizontal
            .iter()
            .map(|(from, _)| Edge::horizontal(from));
        vertical.chain(horizontal)
    }

    /// Total number of internal edges.
    pub fn edge_count(&self) -> usize {
        self.vertical.data.len() + self.horizontal.data.len()
    }

    pub fn passage_count(&self) -> usize {
        self.vertical
            .data
            .iter()
            .chain(self.horizontal.data.iter())
            .filter(|state| **state == EdgeState::Passage)
            .count()
    }

    /// Fills every non-hard edge with walls.
    pub fn fill_walls(&mut self) {
        self.vertical
            .data
            .iter_mut()
            .chain(self.horizontal.data.iter_mut())
            .filter(|state| !state.is_hard())
            .for_each(|state| *state = EdgeState::Wall);
    }

    /// Forgets every non-hard edge, leaving only stamped walls in place.
    pub fn reset(&mut self) {
        self.vertical
            .data
            .iter_mut()
            .chain(self.horizontal.data.iter_mut())
            .filter(|state| !state.is_hard())
            .for_each(|state| *state = EdgeState::Undefined);
    }

    /// Resolves every remaining `Undefined` edge to `Wall`.
    pub fn undefined_to_wall(&mut self) {
        self.vertical
            .data
            .iter_mut()
            .chain(self.horizontal.data.iter_mut())
            .filter(|state| **state == EdgeState::Undefined)
            .for_each(|state| *state = EdgeState::Wall);
    }

    pub fn has_undefined(&self) -> bool {
        self.vertical
            .data
            .iter()
            .chain(self.horizontal.data.iter())
            .any(|state| *state == EdgeState::Undefined)
    }

    /// Starts a boundary walk at `cell` facing `facing`, turned clockwise
    /// until a wall is on the counter-clockwise side.
    ///
    /// # Panics
    /// If `cell` is out of bounds or has no closed side.
    pub fn walk(&self, cell: (usize, usize), facing: Direction) -> BoundaryWalker<'_> {
        BoundaryWalker::new(self, cell, facing)
    }

    /// Checks that the passages form a spanning tree: a walk around the
    /// component of `(0, 0)` crosses every tree edge exactly twice.
    pub fn check(&self) -> bool {
        let straight = self
            .walk((0, 0), Direction::East)
            .filter(|step| step.turn == Turn::Straight)
            .count();
        straight == 2 * self.tree_edge_count()
    }

    /// Alias of [`Maze::check`].
    pub fn is_perfect(&self) -> bool {
        self.check()
    }
}

impl std::ops::Index<Edge> for Maze {
    type Output = EdgeState;

    fn index(&self, edge: Edge) -> &Self::Output {
        match edge.orientation {
            Orientation::Vertical => &self.vertical[edge.from],
            Orientation::Horizontal => &self.horizontal[edge.from],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            Maze::new(0, 3),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 3
            })
        ));
        assert!(Maze::new(1, 1).is_ok());
    }

    #[test]
    fn test_border_is_hard() {
        let maze = Maze::new(3, 2).unwrap();
        assert_eq!(maze.wall((0, 0), Direction::West), EdgeState::HardWall);
        assert_eq!(maze.wall((0, 0), Direction::North), EdgeState::HardWall);
        assert_eq!(maze.wall((2, 1), Direction::East), EdgeState::HardWall);
        assert_eq!(maze.wall((2, 1), Direction::South), EdgeState::HardWall);
        assert_eq!(maze.wall((1, 0), Direction::South), EdgeState::Undefined);
    }

    #[test]
    fn test_open_is_shared_by_both_cells() {
        let mut maze = Maze::new(5, 5).unwrap();
        assert!(maze.open((1, 1), Direction::East));
        assert!(!maze.has_wall((2, 1), Direction::West));
        assert_eq!(maze[Edge::vertical((1, 1))], EdgeState::Passage);
        maze.close((2, 1), Direction::West);
        assert_eq!(maze.wall((1, 1), Direction::East), EdgeState::Wall);
    }

    #[test]
    fn test_hard_wall_never_opens() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.set_hard_wall(Edge::horizontal((0, 0)));
        assert!(!maze.open((0, 0), Direction::South));
        assert!(!maze.flip_edge(Edge::horizontal((0, 0))));
        maze.fill_walls();
        assert_eq!(maze.wall((0, 1), Direction::North), EdgeState::HardWall);
    }

    #[test]
    #[should_panic]
    fn test_open_border_panics() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.open((1, 0), Direction::East);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_query_panics() {
        let maze = Maze::new(2, 2).unwrap();
        maze.wall((2, 0), Direction::North);
    }

    #[test]
    fn test_edges_and_counts() {
        let mut maze = Maze::new(3, 2).unwrap();
        assert_eq!(maze.edge_count(), 2 * 2 + 3);
        assert_eq!(maze.edges().count(), maze.edge_count());
        maze.undefined_to_wall();
        assert!(!maze.has_undefined());
        maze.open((0, 0), Direction::East);
        maze.open((0, 0), Direction::South);
        assert_eq!(maze.passage_count(), 2);
        assert_eq!(maze.degree((0, 0)), 2);
        assert_eq!(maze.nr_walls((0, 0)), 2);
    }

    #[test]
    fn test_check_single_cell() {
        let maze = Maze::new(1, 1).unwrap();
        assert!(maze.check());
        assert!(maze.is_perfect());
    }

    #[test]
    fn test_check_detects_cycle_and_gap() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.fill_walls();
        maze.open((0, 0), Direction::East);
        maze.open((0, 0), Direction::South);
        assert!(!maze.check());
        maze.open((1, 0), Direction::South);
        assert!(maze.check());
        maze.open((0, 1), Direction::East);
        assert!(!maze.check());
    }
}
