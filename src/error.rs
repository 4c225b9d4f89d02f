//! Error types for maze generation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    #[error(
        "Pattern {pattern_width}x{pattern_height} does not fit into {width}x{height} at ({x}, {y})"
    )]
    PatternTooLarge {
        pattern_width: usize,
        pattern_height: usize,
        width: usize,
        height: usize,
        x: usize,
        y: usize,
    },

    #[error("Repair did not converge after {iterations} iterations")]
    RepairNonConvergence { iterations: usize },

    /// Every edge that could be flipped is a hard wall.
    #[error("Repair is stuck: no removable wall reconnects the maze")]
    RepairStuck,

    #[error("Maze is not a perfect maze")]
    NotPerfect,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
