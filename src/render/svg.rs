use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::maze::{Direction, Maze};
use crate::walker::Turn;

#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub wall_width: f64,
    pub hall_width: f64,
    pub color: String,
    pub stroke_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        SvgStyle {
            wall_width: 2.0,
            hall_width: 8.0,
            color: "red".to_string(),
            stroke_width: 1.0,
        }
    }
}

fn sign(negative: bool) -> f64 {
    if negative { -1.0 } else { 1.0 }
}

/// Renders the maze as an SVG document: the outer frame, then a single path
/// tracing the contour of the component of `(0, 0)` through the corners
/// where the boundary walk turns.
pub fn to_svg(maze: &Maze, style: &SvgStyle) -> String {
    let (w, h) = (maze.width() as f64, maze.height() as f64);
    let cell = style.hall_width + style.wall_width;
    let half = style.hall_width / 2.0;
    let right = half + (w + 1.0) * style.wall_width + w * style.hall_width;
    let bottom = half + (h + 1.0) * style.wall_width + h * style.hall_width;

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        "<svg width=\"{:.0}\" height=\"{:.0}\" xmlns=\"http://www.w3.org/2000/svg\">",
        cell * (w + 1.0),
        cell * (h + 1.0)
    );
    let _ = writeln!(svg, "<path d=\"M{:.2} {:.2}", half, half);
    let _ = writeln!(svg, "L {:.2} {:.2}", right, half);
    let _ = writeln!(svg, "L {:.2} {:.2}", right, bottom);
    let _ = writeln!(svg, "L {:.2} {:.2}", half, bottom);
    let _ = writeln!(
        svg,
        "Z\" stroke=\"{}\" stroke-width=\"{:.2}\" fill-opacity=\"0.0\"/>",
        style.color, style.stroke_width
    );

    let _ = writeln!(svg, "<path d=\"M{:.2} {:.2}", cell - half, cell - half);
    for step in maze.walk((0, 0), Direction::East) {
        let (x, y) = (step.cell.0 as f64 + 1.0, step.cell.1 as f64 + 1.0);
        let d = step.facing;
        let corner = match step.turn {
            Turn::Left => Some((
                sign(matches!(d, Direction::East | Direction::North)),
                sign(matches!(d, Direction::East | Direction::South)),
            )),
            Turn::Right => Some((
                sign(matches!(d, Direction::West | Direction::North)),
                sign(matches!(d, Direction::East | Direction::North)),
            )),
            Turn::Straight | Turn::Touch => None,
        };
        if let Some((dx, dy)) = corner {
            let _ = writeln!(
                svg,
                "L {:.2} {:.2}",
                cell * x + half * dx,
                cell * y + half * dy
            );
        }
    }
    let _ = writeln!(
        svg,
        "\" stroke=\"{}\" stroke-width=\"{:.2}\" fill-opacity=\"0.0\"/></svg>",
        style.color, style.stroke_width
    );
    svg
}

/// Writes [`to_svg`] output to `path`.
pub fn write_svg(maze: &Maze, path: impl AsRef<Path>, style: &SvgStyle) -> Result<()> {
    std::fs::write(path.as_ref(), to_svg(maze, style))?;
    tracing::info!("[svg] wrote {}", path.as_ref().display());
    Ok(())
}
