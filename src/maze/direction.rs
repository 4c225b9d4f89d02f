use std::fmt;

/// Compass direction of a cell side, in clockwise order with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps around, so `from_index(4) == East`.
    pub fn from_index(index: usize) -> Self {
        Direction::ALL[index % 4]
    }

    pub fn clockwise(self) -> Self {
        Direction::from_index(self.index() + 1)
    }

    pub fn counter_clockwise(self) -> Self {
        Direction::from_index(self.index() + 3)
    }

    pub fn opposite(self) -> Self {
        Direction::from_index(self.index() + 2)
    }

    /// Moves `cell` one step. The caller guarantees the move stays on the grid.
    pub fn step(self, cell: (usize, usize)) -> (usize, usize) {
        let (x, y) = cell;
        match self {
            Direction::East => (x + 1, y),
            Direction::South => (x, y + 1),
            Direction::West => (x - 1, y),
            Direction::North => (x, y - 1),
        }
    }

    /// Side letter as used by the text dump: right, bottom, left, top.
    pub fn letter(self) -> char {
        ['r', 'b', 'l', 't'][self.index()]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
            Direction::North => write!(f, "north"),
        }
    }
}
