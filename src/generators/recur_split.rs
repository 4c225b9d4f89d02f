use rand::Rng;

use crate::maze::{Direction, Maze, Orientation};

#[derive(Debug, Clone, Copy)]
struct Region {
    top_left: (usize, usize),
    width: usize,
    height: usize,
}

/// Picks where to cut a side of length `size` (at least 2), keeping clear of
/// the ends on larger regions.
fn split_offset(size: usize, rng: &mut impl Rng) -> usize {
    match size {
        2 => 1,
        3..=4 => rng.random_range(1..size),
        5..=6 => rng.random_range(2..size - 1),
        _ => rng.random_range(3..size - 2),
    }
}

/// Recursive division: every region is cut in two along its longer side and
/// the halves are joined by a single passage. Strips of width or height 1
/// are opened end to end.
pub fn recursive_split(maze: &mut Maze, rng: &mut impl Rng) {
    maze.reset();

    let mut pending = vec![Region {
        top_left: (0, 0),
        width: maze.width(),
        height: maze.height(),
    }];

    while let Some(region) = pending.pop() {
        let Region {
            top_left: (x, y),
            width,
            height,
        } = region;

        if width == 1 {
            (1..height).for_each(|k| {
                maze.open((x, y + k), Direction::North);
            });
            continue;
        }
        if height == 1 {
            (1..width).for_each(|k| {
                maze.open((x + k, y), Direction::West);
            });
            continue;
        }

        let orientation = match width.cmp(&height) {
            std::cmp::Ordering::Less => Orientation::Horizontal,
            std::cmp::Ordering::Greater => Orientation::Vertical,
            std::cmp::Ordering::Equal => {
                if rng.random_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        };

        // Halves are pushed in reverse so the first half is carved first
        match orientation {
            Orientation::Horizontal => {
                let upper_height = split_offset(height, rng);
                let y_cut = y + upper_height;
                let holes = (x..x + width)
                    .filter(|&col| !maze.wall((col, y_cut), Direction::North).is_hard())
                    .collect::<Vec<_>>();
                if !holes.is_empty() {
                    let col = holes[rng.random_range(0..holes.len())];
                    maze.open((col, y_cut), Direction::North);
                }
                pending.push(Region {
                    top_left: (x, y_cut),
                    width,
                    height: height - upper_height,
                });
                pending.push(Region {
                    top_left: (x, y),
                    width,
                    height: upper_height,
                });
            }
            Orientation::Vertical => {
                let left_width = split_offset(width, rng);
                let x_cut = x + left_width;
                let holes = (y..y + height)
                    .filter(|&row| !maze.wall((x_cut, row), Direction::West).is_hard())
                    .collect::<Vec<_>>();
                if !holes.is_empty() {
                    let row = holes[rng.random_range(0..holes.len())];
                    maze.open((x_cut, row), Direction::West);
                }
                pending.push(Region {
                    top_left: (x_cut, y),
                    width: width - left_width,
                    height,
                });
                pending.push(Region {
                    top_left: (x, y),
                    width: left_width,
                    height,
                });
            }
        }
    }

    maze.undefined_to_wall();
}
