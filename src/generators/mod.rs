use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::StdRng};

mod fractal;
mod random;
mod recur_backtrack;
mod recur_split;
mod wilson;

pub use fractal::{FractalKind, fractal};
pub use random::{random_exact_then_repair, random_then_repair, trees};
pub use recur_backtrack::recursive_backtrack;
pub use recur_split::recursive_split;
pub use wilson::wilson;

use crate::error::{MazeError, Result};
use crate::maze::Maze;
use crate::repair::RepairOptions;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    RecurBacktrack,
    RecurSplit,
    Fractal(FractalKind),
    Wilson,
    Trees,
    Random,
    RandomExact,
}

impl Generator {
    pub const ALL: [Generator; 12] = [
        Generator::RecurBacktrack,
        Generator::RecurSplit,
        Generator::Fractal(FractalKind::Regular),
        Generator::Fractal(FractalKind::Reverse),
        Generator::Fractal(FractalKind::RandomOrientNoCross),
        Generator::Fractal(FractalKind::ReverseRandomOrientNoCross),
        Generator::Fractal(FractalKind::RandomOrient),
        Generator::Fractal(FractalKind::AllRandom),
        Generator::Wilson,
        Generator::Trees,
        Generator::Random,
        Generator::RandomExact,
    ];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "backtrack",
            Generator::RecurSplit => "split",
            Generator::Fractal(kind) => match kind {
                FractalKind::Regular => "fractal",
                FractalKind::Reverse => "fractal-reverse",
                FractalKind::RandomOrientNoCross => "fractal-random-nocross",
                FractalKind::ReverseRandomOrientNoCross => "fractal-reverse-random-nocross",
                FractalKind::RandomOrient => "fractal-random",
                FractalKind::AllRandom => "fractal-all-random",
            },
            Generator::Wilson => "wilson",
            Generator::Trees => "trees",
            Generator::Random => "random",
            Generator::RandomExact => "random-exact",
        }
    }

    /// Whether the generator always yields a perfect maze on a maze without
    /// hard walls.
    pub fn is_always_perfect(self) -> bool {
        !matches!(self, Generator::Fractal(_))
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker"),
            Generator::RecurSplit => write!(f, "Recursive Split"),
            Generator::Fractal(kind) => write!(f, "Fractal ({})", kind),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::Trees => write!(f, "Repair-Grown Trees"),
            Generator::Random => write!(f, "Random then Repair"),
            Generator::RandomExact => write!(f, "Random Exact then Repair"),
        }
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Generator::ALL
            .into_iter()
            .find(|generator| generator.name() == s)
            .ok_or_else(|| MazeError::InvalidArgument(format!("unknown generator '{s}'")))
    }
}

/// Generates a maze in place with the default repair budget.
pub fn generate_maze(maze: &mut Maze, generator: Generator, rng: &mut impl Rng) -> Result<()> {
    let options = RepairOptions::for_maze(maze);
    generate_maze_with(maze, generator, rng, &options)
}

/// Generates a maze in place. Hard walls already in `maze` are kept; every
/// other edge is regenerated.
pub fn generate_maze_with(
    maze: &mut Maze,
    generator: Generator,
    rng: &mut impl Rng,
    options: &RepairOptions,
) -> Result<()> {
    tracing::debug!(
        "[generate] {} on a {}x{} maze",
        generator,
        maze.width(),
        maze.height()
    );
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(maze, rng),
        Generator::RecurSplit => recursive_split(maze, rng),
        Generator::Fractal(kind) => fractal(maze, kind, rng),
        Generator::Wilson => wilson(maze, rng),
        Generator::Trees => {
            let flips = trees(maze, rng, options)?;
            tracing::debug!("[generate] repair grew the tree in {} flips", flips);
        }
        Generator::Random => {
            let flips = random_then_repair(maze, rng, options)?;
            tracing::debug!("[generate] repair needed {} flips", flips);
        }
        Generator::RandomExact => {
            let flips = random_exact_then_repair(maze, rng, options)?;
            tracing::debug!("[generate] repair needed {} flips", flips);
        }
    }
    Ok(())
}
