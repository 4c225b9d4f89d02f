use crate::maze::{Direction, Maze};
use crate::walker::Turn;

/// Cell with the smallest `x + y` among the cells a walk from `cell` enters,
/// starting from `(cell, bound)`. Stops early once `(0, 0)` is found.
fn closest_to_origin(
    maze: &Maze,
    cell: (usize, usize),
    facing: Direction,
    bound: usize,
) -> ((usize, usize), usize) {
    let mut best = (cell, bound);
    for step in maze
        .walk(cell, facing)
        .filter(|step| step.turn == Turn::Straight)
    {
        let diagonal = step.cell.0 + step.cell.1;
        if diagonal < best.1 {
            best = (step.cell, diagonal);
            if diagonal == 0 {
                break;
            }
        }
    }
    best
}

/// Removes every cross (a cell open on all four sides) from a perfect maze
/// while keeping it perfect.
///
/// Cells are visited by anti-diagonal from the bottom-right corner. The north
/// side of a cross is closed, which splits the tree in two; the half that does
/// not contain `(0, 0)` is then reattached through the north (or, on the top
/// row, the west) side of its cell closest to the origin. Returns the number
/// of crosses removed.
pub fn remove_crosses(maze: &mut Maze) -> usize {
    let (width, height) = (maze.width(), maze.height());
    let mut removed = 0;

    for k in (1..width + height - 1).rev() {
        for x in 0..width.min(k + 1) {
            let y = k - x;
            if y >= height || maze.nr_walls((x, y)) != 0 {
                continue;
            }
            let cross = (x, y);
            maze.close(cross, Direction::North);

            let (mut best, diagonal) = closest_to_origin(maze, cross, Direction::East, k);
            if diagonal == 0 {
                // The cross kept the origin, reattach the half above it instead
                let above = (x, y - 1);
                best = closest_to_origin(maze, above, Direction::West, k - 1).0;
            }

            let mut reattached = false;
            for dir in [Direction::North, Direction::West] {
                if maze.edge_towards(best, dir).is_some() && maze.open(best, dir) {
                    reattached = true;
                    break;
                }
            }
            if reattached {
                removed += 1;
            } else {
                tracing::warn!(
                    "[repair] hard walls keep {:?} from reattaching, leaving the cross at {:?}",
                    best,
                    cross
                );
                maze.open(cross, Direction::North);
            }
        }
    }

    tracing::debug!("[repair] removed {} crosses", removed);
    removed
}
