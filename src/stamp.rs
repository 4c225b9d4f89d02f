//! Overlaying a pattern maze's walls onto a larger maze as hard walls.
//!
//! Stamping runs before generation: the hard walls it leaves behind are never
//! opened again, so a small seed maze dictates the large-scale structure while
//! a generator fills in the detail.

use crate::error::{MazeError, Result};
use crate::maze::{Edge, Maze, Orientation};

fn too_large(target: &Maze, pattern: &Maze, x: usize, y: usize) -> MazeError {
    MazeError::PatternTooLarge {
        pattern_width: pattern.width(),
        pattern_height: pattern.height(),
        width: target.width(),
        height: target.height(),
        x,
        y,
    }
}

/// Copies every wall of `pattern` into `target` at offset `(x, y)` as a hard
/// wall. Returns the number of stamped edges.
///
/// # Errors
/// `PatternTooLarge` if the pattern does not fit; `target` is left untouched.
pub fn stamp_at(target: &mut Maze, pattern: &Maze, x: usize, y: usize) -> Result<usize> {
    let fits = |offset: usize, size: usize, limit: usize| {
        offset.checked_add(size).is_some_and(|end| end <= limit)
    };
    if !fits(x, pattern.width(), target.width())
        || !fits(y, pattern.height(), target.height())
    {
        return Err(too_large(target, pattern, x, y));
    }

    let walls = pattern
        .edges()
        .filter(|&edge| pattern[edge].is_wall())
        .map(|edge| Edge {
            from: (edge.from.0 + x, edge.from.1 + y),
            orientation: edge.orientation,
        })
        .collect::<Vec<_>>();
    walls.iter().for_each(|&edge| target.set_hard_wall(edge));

    tracing::debug!(
        "[stamp] {} hard walls from a {}x{} pattern at ({}, {})",
        walls.len(),
        pattern.width(),
        pattern.height(),
        x,
        y
    );
    Ok(walls.len())
}

/// Scales `pattern` over the whole of `target`: each pattern wall becomes a
/// run of hard walls along the matching line of the scaled cell.
/// Returns the number of stamped edges.
///
/// # Errors
/// `PatternTooLarge` if the pattern is larger than `target` in either dimension.
pub fn stamp_stretched(target: &mut Maze, pattern: &Maze) -> Result<usize> {
    let (w, h) = (target.width(), target.height());
    let (pw, ph) = (pattern.width(), pattern.height());
    if pw > w || ph > h {
        return Err(too_large(target, pattern, 0, 0));
    }

    let mut stamped = 0;
    for edge in pattern.edges().filter(|&edge| pattern[edge].is_wall()) {
        let (i, j) = edge.from;
        match edge.orientation {
            Orientation::Vertical => {
                let column = (i + 1) * w / pw - 1;
                for row in j * h / ph..(j + 1) * h / ph {
                    target.set_hard_wall(Edge::vertical((column, row)));
                    stamped += 1;
                }
            }
            Orientation::Horizontal => {
                let row = (j + 1) * h / ph - 1;
                for column in i * w / pw..(i + 1) * w / pw {
                    target.set_hard_wall(Edge::horizontal((column, row)));
                    stamped += 1;
                }
            }
        }
    }

    tracing::debug!(
        "[stamp] {} hard walls from a {}x{} pattern stretched over {}x{}",
        stamped,
        pw,
        ph,
        w,
        h
    );
    Ok(stamped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze, get_rng};
    use crate::maze::EdgeState;

    fn pattern(seed: u64, width: usize, height: usize) -> Maze {
        let mut pattern = Maze::new(width, height).unwrap();
        generate_maze(&mut pattern, Generator::RecurBacktrack, &mut get_rng(Some(seed))).unwrap();
        pattern
    }

    #[test]
    fn test_stamp_at_marks_only_pattern_walls() {
        let pattern = pattern(70, 3, 3);
        let mut maze = Maze::new(8, 8).unwrap();
        let stamped = stamp_at(&mut maze, &pattern, 2, 4).unwrap();
        assert_eq!(stamped, pattern.edge_count() - 8);

        for edge in pattern.edges() {
            let shifted = Edge {
                from: (edge.from.0 + 2, edge.from.1 + 4),
                orientation: edge.orientation,
            };
            assert_eq!(maze[shifted].is_hard(), pattern[edge].is_wall());
        }
        let hard = maze.edges().filter(|&e| maze[e].is_hard()).count();
        assert_eq!(hard, stamped);
    }

    #[test]
    fn test_stamp_at_rejects_overflow_without_mutation() {
        let pattern = pattern(71, 4, 4);
        let mut maze = Maze::new(6, 6).unwrap();
        let before = maze.clone();
        assert!(matches!(
            stamp_at(&mut maze, &pattern, 3, 0),
            Err(MazeError::PatternTooLarge { x: 3, y: 0, .. })
        ));
        assert_eq!(maze, before);

        for (x, y) in [(usize::MAX, 0), (0, usize::MAX), (usize::MAX - 1, usize::MAX - 1)] {
            assert!(matches!(
                stamp_at(&mut maze, &pattern, x, y),
                Err(MazeError::PatternTooLarge { .. })
            ));
        }
        assert_eq!(maze, before);
    }

    #[test]
    fn test_generators_keep_stamped_walls() {
        let pattern = pattern(72, 4, 4);
        let mut rng = get_rng(Some(73));
        for generator in [
            Generator::RecurBacktrack,
            Generator::RecurSplit,
            Generator::Wilson,
            Generator::Random,
            Generator::Fractal(crate::generators::FractalKind::AllRandom),
        ] {
            let mut maze = Maze::new(10, 10).unwrap();
            stamp_at(&mut maze, &pattern, 3, 3).unwrap();
            let hard = maze
                .edges()
                .filter(|&e| maze[e].is_hard())
                .collect::<Vec<_>>();
            generate_maze(&mut maze, generator, &mut rng).unwrap();
            assert!(hard.iter().all(|&e| maze[e] == EdgeState::HardWall));
            // Split may cut a region along a line of hard walls
            if generator.is_always_perfect() && generator != Generator::RecurSplit {
                assert!(maze.check(), "{generator} failed around a stamp");
            }
        }
    }

    #[test]
    fn test_stretched_covers_scaled_lines() {
        // 2x1 pattern with its single wall, stretched over 6x3
        let mut pattern = Maze::new(2, 1).unwrap();
        pattern.undefined_to_wall();
        let mut maze = Maze::new(6, 3).unwrap();
        assert_eq!(stamp_stretched(&mut maze, &pattern).unwrap(), 3);
        for row in 0..3 {
            assert!(maze[Edge::vertical((2, row))].is_hard());
        }
    }

    #[test]
    fn test_stretched_pattern_still_generates() {
        let pattern = pattern(74, 3, 3);
        let mut maze = Maze::new(12, 12).unwrap();
        stamp_stretched(&mut maze, &pattern).unwrap();
        generate_maze(&mut maze, Generator::Wilson, &mut get_rng(Some(75))).unwrap();
        assert!(maze.check());
    }

    #[test]
    fn test_stretched_rejects_larger_pattern() {
        let pattern = pattern(76, 5, 2);
        let mut maze = Maze::new(4, 4).unwrap();
        assert!(stamp_stretched(&mut maze, &pattern).is_err());
    }
}
