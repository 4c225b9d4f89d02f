//! Output collaborators. They only read edge states and walk the maze.

pub mod svg;
pub mod text;

pub use svg::{SvgStyle, to_svg, write_svg};
pub use text::{Glyph, TextRenderer, dump};
