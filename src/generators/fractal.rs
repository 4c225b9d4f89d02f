//! Fractal subdivision around lattice points.
//!
//! A lattice point `(x, y)` is the corner shared by cells `(x-1, y-1)` and
//! `(x, y)`. Four wall arms of length `size` leave it: east (`0`), south
//! (`1`), west (`2`) and north (`3`). Each level opens one passage in three
//! of the arms, then recurses into the four quadrant centers with half the
//! size. The result is not always a spanning tree.

use std::fmt;

use rand::Rng;

use crate::maze::{Direction, Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractalKind {
    /// Always skips the south arm, passages next to the center.
    Regular,
    /// Like `Regular` with passages at the far end of each arm.
    Reverse,
    /// Random skipped arm, never repeating the crossing of the parent level.
    RandomOrientNoCross,
    /// `RandomOrientNoCross` with passages at the far end of each arm.
    ReverseRandomOrientNoCross,
    /// Random skipped arm, crossings allowed.
    RandomOrient,
    /// Random skipped arm and random passage positions.
    AllRandom,
}

impl FractalKind {
    pub const ALL: [FractalKind; 6] = [
        FractalKind::Regular,
        FractalKind::Reverse,
        FractalKind::RandomOrientNoCross,
        FractalKind::ReverseRandomOrientNoCross,
        FractalKind::RandomOrient,
        FractalKind::AllRandom,
    ];

    fn is_reverse(self) -> bool {
        matches!(
            self,
            FractalKind::Reverse | FractalKind::ReverseRandomOrientNoCross
        )
    }

    fn avoids_crossing(self) -> bool {
        matches!(
            self,
            FractalKind::RandomOrientNoCross | FractalKind::ReverseRandomOrientNoCross
        )
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractalKind::Regular => write!(f, "regular"),
            FractalKind::Reverse => write!(f, "reverse"),
            FractalKind::RandomOrientNoCross => write!(f, "random orientation, no crossings"),
            FractalKind::ReverseRandomOrientNoCross => {
                write!(f, "reverse, random orientation, no crossings")
            }
            FractalKind::RandomOrient => write!(f, "random orientation"),
            FractalKind::AllRandom => write!(f, "all random"),
        }
    }
}

struct Painter<'a, R> {
    maze: &'a mut Maze,
    rng: &'a mut R,
    kind: FractalKind,
    width: isize,
    height: isize,
}

impl<R: Rng> Painter<'_, R> {
    /// Chooses a passage position between the `near` and `far` ends of an
    /// arm, both already clipped to the grid.
    fn pick(&mut self, near: isize, far: isize) -> usize {
        debug_assert!(near >= 0 && far >= 0, "arm ends {near}..{far} leave the grid");
        let (near, far) = (near as usize, far as usize);
        if self.kind.is_reverse() {
            far
        } else if self.kind == FractalKind::AllRandom {
            self.rng.random_range(near.min(far)..=near.max(far))
        } else {
            near
        }
    }

    fn east_arm(&mut self, x: isize, size: isize) -> usize {
        let near = x.max(0);
        let far = (x + size).min(self.width) - 1;
        self.pick(near, far)
    }

    fn west_arm(&mut self, x: isize, size: isize) -> usize {
        let near = x.min(self.width) - 1;
        let far = (x - size).max(0);
        self.pick(near, far)
    }

    fn south_arm(&mut self, y: isize, size: isize) -> usize {
        let near = y.max(0);
        let far = (y + size).min(self.height) - 1;
        self.pick(near, far)
    }

    fn north_arm(&mut self, y: isize, size: isize) -> usize {
        let near = y.min(self.height) - 1;
        let far = (y - size).max(0);
        self.pick(near, far)
    }

    /// Opens the horizontal wall line `y` at column `col`.
    fn cross_row_line(&mut self, col: usize, y: isize) {
        self.maze.open((col, y as usize), Direction::North);
    }

    /// Opens the vertical wall line `x` at row `row`.
    fn cross_column_line(&mut self, x: isize, row: usize) {
        self.maze.open((x as usize, row), Direction::West);
    }

    fn skipped_arm(&mut self, avoid: Option<usize>) -> usize {
        if self.kind.avoids_crossing() {
            // Arms opposite the avoided corner; the top level draws from {2, 3}
            let offset = self.rng.random_range(3..5usize);
            (avoid.unwrap_or(3) + offset) % 4
        } else if matches!(self.kind, FractalKind::Regular | FractalKind::Reverse) {
            1
        } else {
            self.rng.random_range(0..4)
        }
    }

    fn subdivide(&mut self, center: (isize, isize), size: isize, avoid: Option<usize>) {
        let (x, y) = center;
        if x + size <= 0 || x - size >= self.width || y + size <= 0 || y - size >= self.height {
            return;
        }

        let mut skipped = None;
        if x <= 0 {
            if y > 0 && y < self.height {
                let col = self.east_arm(x, size);
                self.cross_row_line(col, y);
            }
        } else if x >= self.width {
            if y > 0 && y < self.height {
                let col = self.west_arm(x, size);
                self.cross_row_line(col, y);
            }
        } else if y <= 0 {
            let row = self.south_arm(y, size);
            self.cross_column_line(x, row);
        } else if y >= self.height {
            let row = self.north_arm(y, size);
            self.cross_column_line(x, row);
        } else {
            let skip = self.skipped_arm(avoid);
            if skip != 0 {
                let col = self.east_arm(x, size);
                self.cross_row_line(col, y);
            }
            if skip != 1 {
                let row = self.south_arm(y, size);
                self.cross_column_line(x, row);
            }
            if skip != 2 {
                let col = self.west_arm(x, size);
                self.cross_row_line(col, y);
            }
            if skip != 3 {
                let row = self.north_arm(y, size);
                self.cross_column_line(x, row);
            }
            skipped = Some(skip);
        }

        if size == 1 {
            return;
        }
        let half = size / 2;
        // Quadrants in clockwise order: north-east, south-east, south-west, north-west
        let quadrants = [
            (x + half, y - half),
            (x + half, y + half),
            (x - half, y + half),
            (x - half, y - half),
        ];
        for (corner, quadrant) in quadrants.into_iter().enumerate() {
            let inherited = inherited_corner(corner, avoid, skipped);
            self.subdivide(quadrant, half, inherited);
        }
    }
}

/// Corner a quadrant must keep closed: the parent's own constraint when it
/// applies to this quadrant, otherwise the corner facing the two arms next to
/// the skipped one.
fn inherited_corner(corner: usize, avoid: Option<usize>, skipped: Option<usize>) -> Option<usize> {
    if avoid == Some(corner) {
        return Some(corner);
    }
    match skipped {
        Some(skip) if skip == (corner + 1) % 4 || skip == (corner + 2) % 4 => Some((corner + 2) % 4),
        _ => None,
    }
}

/// Smallest power of two whose square around `center` covers the maze.
fn initial_size(center: (isize, isize), width: isize, height: isize) -> isize {
    let (x, y) = center;
    let mut size = 1;
    while x - size > 0 || x + size < width - 1 || y - size > 0 || y + size < height - 1 {
        size *= 2;
    }
    size
}

pub fn fractal<R: Rng>(maze: &mut Maze, kind: FractalKind, rng: &mut R) {
    maze.reset();

    let width = maze.width() as isize;
    let height = maze.height() as isize;
    let center = (width / 2, height / 2);
    let size = initial_size(center, width, height);

    let mut painter = Painter {
        maze: &mut *maze,
        rng,
        kind,
        width,
        height,
    };
    painter.subdivide(center, size, None);

    maze.undefined_to_wall();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::repair::{RepairOptions, fix};

    #[test]
    fn test_initial_size_covers_grid() {
        assert_eq!(initial_size((0, 0), 1, 1), 1);
        assert_eq!(initial_size((4, 4), 8, 8), 4);
        assert_eq!(initial_size((15, 2), 30, 4), 16);
    }

    #[test]
    fn test_random_choices_stay_in_range() {
        let mut maze = Maze::new(8, 8).unwrap();
        let mut rng = get_rng(Some(13));
        let mut painter = Painter {
            maze: &mut maze,
            rng: &mut rng,
            kind: FractalKind::RandomOrientNoCross,
            width: 8,
            height: 8,
        };
        for _ in 0..50 {
            assert!(matches!(painter.skipped_arm(None), 2 | 3));
            for corner in 0..4 {
                let skip = painter.skipped_arm(Some(corner));
                assert!(skip == (corner + 3) % 4 || skip == corner);
            }
        }

        painter.kind = FractalKind::AllRandom;
        for _ in 0..50 {
            assert!((1..=5).contains(&painter.pick(1, 5)));
            assert!((1..=5).contains(&painter.pick(5, 1)));
            assert_eq!(painter.pick(3, 3), 3);
        }
    }

    #[test]
    fn test_inherited_corner() {
        assert_eq!(inherited_corner(0, Some(0), Some(3)), Some(0));
        assert_eq!(inherited_corner(0, None, Some(1)), Some(2));
        assert_eq!(inherited_corner(0, None, Some(2)), Some(2));
        assert_eq!(inherited_corner(0, None, Some(3)), None);
        assert_eq!(inherited_corner(2, None, Some(0)), Some(0));
        assert_eq!(inherited_corner(3, Some(1), None), None);
    }

    #[test]
    fn test_every_variant_resolves_all_edges() {
        let mut rng = get_rng(Some(11));
        for kind in FractalKind::ALL {
            for (w, h) in [(1, 1), (2, 3), (8, 8), (13, 21)] {
                let mut maze = Maze::new(w, h).unwrap();
                fractal(&mut maze, kind, &mut rng);
                assert!(!maze.has_undefined(), "{kind} left undefined edges");
                assert!(maze.passage_count() > 0 || w * h == 1);
            }
        }
    }

    #[test]
    fn test_single_cell_is_valid() {
        let mut maze = Maze::new(1, 1).unwrap();
        fractal(&mut maze, FractalKind::Regular, &mut get_rng(Some(0)));
        assert!(maze.check());
    }

    #[test]
    fn test_repair_completes_every_variant() {
        let mut rng = get_rng(Some(12));
        for kind in FractalKind::ALL {
            let mut maze = Maze::new(16, 12).unwrap();
            fractal(&mut maze, kind, &mut rng);
            let options = RepairOptions::for_maze(&maze);
            fix(&mut maze, &mut rng, &options).unwrap();
            assert!(maze.check(), "{kind} could not be repaired");
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut a = Maze::new(10, 10).unwrap();
        let mut b = Maze::new(10, 10).unwrap();
        fractal(&mut a, FractalKind::AllRandom, &mut get_rng(Some(99)));
        fractal(&mut b, FractalKind::AllRandom, &mut get_rng(Some(99)));
        assert_eq!(a, b);
    }
}
