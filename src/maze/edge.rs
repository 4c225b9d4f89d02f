use crate::maze::Orientation;

/// State of the edge separating two adjacent cells.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeState {
    /// Open, the two cells are connected.
    Passage,
    /// Closed, generators and repair may open it.
    Wall,
    /// Closed for good. Only stamping creates these.
    HardWall,
    /// Not decided yet. Resolved to `Wall` once a generator finishes.
    #[default]
    Undefined,
}

impl EdgeState {
    /// Anything but a passage blocks movement.
    pub fn is_closed(self) -> bool {
        self != EdgeState::Passage
    }

    /// `Wall` or `HardWall`.
    pub fn is_wall(self) -> bool {
        matches!(self, EdgeState::Wall | EdgeState::HardWall)
    }

    pub fn is_hard(self) -> bool {
        self == EdgeState::HardWall
    }
}

/// A physical internal edge, named the way the maze stores it:
/// - `Vertical`: the wall to the right of `from` (between `from` and `(from.0+1, from.1)`)
/// - `Horizontal`: the wall below `from` (between `from` and `(from.0, from.1+1)`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: (usize, usize),
    pub orientation: Orientation,
}

impl Edge {
    pub fn vertical(from: (usize, usize)) -> Self {
        Edge {
            from,
            orientation: Orientation::Vertical,
        }
    }

    pub fn horizontal(from: (usize, usize)) -> Self {
        Edge {
            from,
            orientation: Orientation::Horizontal,
        }
    }

    /// The cell on the other side of the edge.
    pub fn to(&self) -> (usize, usize) {
        let (x, y) = self.from;
        match self.orientation {
            Orientation::Vertical => (x + 1, y),
            Orientation::Horizontal => (x, y + 1),
        }
    }
}
