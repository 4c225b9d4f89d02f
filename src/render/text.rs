use crossterm::style::{Color, Stylize};

use std::fmt;
use std::io::Write;

use crate::maze::{Direction, EdgeState, Maze};

/// One character of the text drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    Corner,
    /// Edge above a cell, drawn on the corner row.
    Top(EdgeState),
    /// Edge left of a cell, drawn on the cell row.
    Side(EdgeState),
    Floor,
}

impl Glyph {
    /// The width of each glyph when rendered, in character widths.
    pub const WIDTH: usize = 1;

    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Corner => "+",
            Glyph::Top(state) if state.is_closed() => "-",
            Glyph::Side(state) if state.is_closed() => "|",
            Glyph::Top(_) | Glyph::Side(_) | Glyph::Floor => " ",
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Top(EdgeState::HardWall) | Glyph::Side(EdgeState::HardWall) => Color::Magenta,
            Glyph::Top(EdgeState::Undefined) | Glyph::Side(EdgeState::Undefined) => Color::DarkGrey,
            Glyph::Corner | Glyph::Top(_) | Glyph::Side(_) => Color::White,
            Glyph::Floor => Color::Reset,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.symbol().with(self.color());

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::WIDTH,
                "Each glyph must occupy exactly one character width."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Glyph rows of the drawing: a corner row and a cell row per maze row, then
/// the closing bottom row.
fn rows(maze: &Maze) -> Vec<Vec<Glyph>> {
    let mut rows = Vec::with_capacity(2 * maze.height() + 1);
    for y in 0..maze.height() {
        let mut top = Vec::with_capacity(2 * maze.width() + 1);
        let mut cells = Vec::with_capacity(2 * maze.width() + 1);
        for x in 0..maze.width() {
            top.push(Glyph::Corner);
            top.push(Glyph::Top(maze.wall((x, y), Direction::North)));
            cells.push(Glyph::Side(maze.wall((x, y), Direction::West)));
            cells.push(Glyph::Floor);
        }
        top.push(Glyph::Corner);
        cells.push(Glyph::Side(EdgeState::HardWall));
        rows.push(top);
        rows.push(cells);
    }
    let mut bottom = (0..maze.width())
        .flat_map(|_| [Glyph::Corner, Glyph::Top(EdgeState::HardWall)])
        .collect::<Vec<_>>();
    bottom.push(Glyph::Corner);
    rows.push(bottom);
    rows
}

/// Plain ASCII drawing.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in rows(self) {
            for glyph in row {
                write!(f, "{}", glyph.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Writes the drawing to a terminal, optionally colored.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer {
    pub color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        TextRenderer { color }
    }

    pub fn render(&self, maze: &Maze, out: &mut impl Write) -> std::io::Result<()> {
        if !self.color {
            write!(out, "{}", maze)?;
            return out.flush();
        }
        for row in rows(maze) {
            for glyph in row {
                write!(out, "{}", glyph)?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}

/// One line per maze row listing the open sides of every cell as `rblt`.
pub fn dump(maze: &Maze) -> String {
    let mut out = String::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            for dir in Direction::ALL {
                out.push(if maze.has_wall((x, y), dir) {
                    ' '
                } else {
                    dir.letter()
                });
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_maze() -> Maze {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.undefined_to_wall();
        maze.open((0, 0), Direction::East);
        maze.open((0, 0), Direction::South);
        maze.open((1, 0), Direction::South);
        maze
    }

    #[test]
    fn test_ascii_drawing() {
        let expected = "\
+-+-+
|   |
+ + +
| | |
+-+-+
";
        assert_eq!(corner_maze().to_string(), expected);
    }

    #[test]
    fn test_plain_renderer_matches_display() {
        let maze = corner_maze();
        let mut out = Vec::new();
        TextRenderer::new(false).render(&maze, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), maze.to_string());
    }

    #[test]
    fn test_colored_renderer_keeps_symbols() {
        let maze = corner_maze();
        let mut out = Vec::new();
        TextRenderer::new(true).render(&maze, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('|'));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_dump() {
        assert_eq!(dump(&corner_maze()), "rb    bl  \n   t    t \n");
    }
}
