use std::fmt;

use crate::maze::{Direction, Maze};

/// Cell counts per open-side configuration.
///
/// Configurations are bit masks over the open sides: bit 0 east, bit 1
/// south, bit 2 west, bit 3 north.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeStats {
    pub configurations: [usize; 16],
}

impl DegreeStats {
    pub fn collect(maze: &Maze) -> Self {
        let mut configurations = [0; 16];
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let mask = Direction::ALL
                    .into_iter()
                    .filter(|&dir| !maze.has_wall((x, y), dir))
                    .fold(0, |mask, dir| mask | 1 << dir.index());
                configurations[mask] += 1;
            }
        }
        DegreeStats { configurations }
    }

    fn count_where(&self, keep: impl Fn(usize) -> bool) -> usize {
        (0..16)
            .filter(|&mask| keep(mask))
            .map(|mask| self.configurations[mask])
            .sum()
    }

    /// Cells with exactly `degree` open sides.
    pub fn degree(&self, degree: u32) -> usize {
        self.count_where(|mask| (mask as u32).count_ones() == degree)
    }

    /// Degree-2 cells going straight through (east-west or north-south).
    pub fn straight(&self) -> usize {
        self.configurations[0b0101] + self.configurations[0b1010]
    }

    /// Degree-2 cells turning a corner.
    pub fn turns(&self) -> usize {
        self.degree(2) - self.straight()
    }
}

impl fmt::Display for DegreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (mask, &count) in self.configurations.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let sides = Direction::ALL
                .into_iter()
                .filter(|dir| mask & (1 << dir.index()) != 0)
                .map(Direction::letter)
                .collect::<String>();
            write!(f, " {}:{}", sides, count)?;
        }
        writeln!(f)?;

        writeln!(f, "degree 1: {}", self.degree(1))?;
        if self.degree(2) > 0 {
            write!(f, "degree 2: {}", self.degree(2))?;
            if self.straight() > 0 {
                write!(f, " straight:{}", self.straight())?;
            }
            if self.turns() > 0 {
                write!(f, " turn:{}", self.turns())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "degree 3: {}", self.degree(3))?;
        if self.degree(4) > 0 {
            writeln!(f, "degree 4: {}", self.degree(4))?;
        }
        Ok(())
    }
}
