//! Command line configuration.

use std::path::PathBuf;

use crate::error::{MazeError, Result};
use crate::generators::Generator;

/// How a pattern maze is laid onto the main maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampMode {
    At { x: usize, y: usize },
    Stretched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    pub width: usize,
    pub height: usize,
    pub generator: Generator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub generator: Generator,
    /// Seed for the random source; OS entropy when absent.
    pub seed: Option<u64>,
    pub pattern: Option<PatternConfig>,
    pub stamp: StampMode,
    pub remove_crosses: bool,
    /// Run repair after generation, for generators that do not repair themselves.
    pub repair: bool,
    pub max_repair_iterations: Option<usize>,
    pub svg: Option<PathBuf>,
    pub stats: bool,
    pub distances: bool,
    pub dump: bool,
    pub color: bool,
    pub log_file: Option<PathBuf>,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 30,
            height: 30,
            generator: Generator::Random,
            seed: None,
            pattern: None,
            stamp: StampMode::Stretched,
            remove_crosses: false,
            repair: false,
            max_repair_iterations: None,
            svg: None,
            stats: false,
            distances: false,
            dump: false,
            color: false,
            log_file: None,
            help: false,
        }
    }
}

pub const USAGE: &str = "\
Usage: mazegen [options]

Options:
  --size WxH                   maze size in cells (default 30x30)
  --generator NAME             generation algorithm (default random)
  --seed N                     seed for reproducible output
  --pattern WxH:NAME           generate a pattern maze and stamp it first
  --stamp at:X,Y | stretched   how the pattern is stamped (default stretched)
  --remove-crosses             remove cells open on all four sides
  --repair                     repair the result into a perfect maze
  --max-repair-iterations N    flip budget for repair
  --svg FILE                   write the maze contour as SVG
  --stats                      print degree statistics
  --distances                  print the pairwise distance histogram
  --dump                       print the open sides of every cell
  --color                      color the text drawing
  --log-file FILE              write logs to FILE instead of stderr
  -h, --help                   show this message

Generators: backtrack, split, fractal, fractal-reverse, fractal-random-nocross,
  fractal-reverse-random-nocross, fractal-random, fractal-all-random, wilson,
  trees, random, random-exact";

fn invalid(message: impl Into<String>) -> MazeError {
    MazeError::InvalidArgument(message.into())
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| invalid(format!("{what} must be a number, got '{value}'")))
}

/// Parses `WxH`.
fn parse_size(value: &str) -> Result<(usize, usize)> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| invalid(format!("size must look like WxH, got '{value}'")))?;
    Ok((parse_number(w, "width")?, parse_number(h, "height")?))
}

fn parse_pattern(value: &str) -> Result<PatternConfig> {
    let (size, generator) = value
        .split_once(':')
        .ok_or_else(|| invalid(format!("pattern must look like WxH:NAME, got '{value}'")))?;
    let (width, height) = parse_size(size)?;
    Ok(PatternConfig {
        width,
        height,
        generator: generator.parse()?,
    })
}

fn parse_stamp(value: &str) -> Result<StampMode> {
    if value == "stretched" {
        return Ok(StampMode::Stretched);
    }
    let offset = value
        .strip_prefix("at:")
        .ok_or_else(|| invalid(format!("stamp must be 'stretched' or 'at:X,Y', got '{value}'")))?;
    let (x, y) = offset
        .split_once(',')
        .ok_or_else(|| invalid(format!("stamp offset must look like X,Y, got '{offset}'")))?;
    Ok(StampMode::At {
        x: parse_number(x, "stamp x")?,
        y: parse_number(y, "stamp y")?,
    })
}

impl Config {
    /// Parses arguments, without the executable name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| invalid(format!("{name} expects a value")))
            };
            match arg.as_str() {
                "--size" => {
                    (config.width, config.height) = parse_size(&value("--size")?)?;
                }
                "--generator" => config.generator = value("--generator")?.parse()?,
                "--seed" => config.seed = Some(parse_number(&value("--seed")?, "seed")?),
                "--pattern" => config.pattern = Some(parse_pattern(&value("--pattern")?)?),
                "--stamp" => config.stamp = parse_stamp(&value("--stamp")?)?,
                "--remove-crosses" => config.remove_crosses = true,
                "--repair" => config.repair = true,
                "--max-repair-iterations" => {
                    config.max_repair_iterations = Some(parse_number(
                        &value("--max-repair-iterations")?,
                        "repair iterations",
                    )?);
                }
                "--svg" => config.svg = Some(PathBuf::from(value("--svg")?)),
                "--stats" => config.stats = true,
                "--distances" => config.distances = true,
                "--dump" => config.dump = true,
                "--color" => config.color = true,
                "--log-file" => config.log_file = Some(PathBuf::from(value("--log-file")?)),
                "-h" | "--help" => config.help = true,
                other => return Err(invalid(format!("unknown argument '{other}'"))),
            }
        }

        if config.width == 0 || config.height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        Ok(config)
    }
}
