use std::io::Write;
use std::process::ExitCode;

use mazegen::{
    analysis::{DegreeStats, DistanceSummary, distance_histogram},
    config::{Config, StampMode, USAGE},
    error::Result,
    generators::{generate_maze_with, get_rng},
    logging,
    maze::Maze,
    render::{SvgStyle, TextRenderer, dump, write_svg},
    repair::{RepairOptions, fix, remove_crosses},
    stamp::{stamp_at, stamp_stretched},
};

fn run(config: &Config) -> Result<()> {
    let mut rng = get_rng(config.seed);
    let mut maze = Maze::new(config.width, config.height)?;
    let options = match config.max_repair_iterations {
        Some(iterations) => RepairOptions::with_max_iterations(iterations),
        None => RepairOptions::for_maze(&maze),
    };

    if let Some(pattern_config) = config.pattern {
        let mut pattern = Maze::new(pattern_config.width, pattern_config.height)?;
        generate_maze_with(&mut pattern, pattern_config.generator, &mut rng, &options)?;
        let stamped = match config.stamp {
            StampMode::At { x, y } => stamp_at(&mut maze, &pattern, x, y)?,
            StampMode::Stretched => stamp_stretched(&mut maze, &pattern)?,
        };
        tracing::info!(
            "Stamped {} hard walls from a {} pattern",
            stamped,
            pattern_config.generator
        );
    }

    generate_maze_with(&mut maze, config.generator, &mut rng, &options)?;
    tracing::info!(
        "Generated a {}x{} maze with {}",
        maze.width(),
        maze.height(),
        config.generator
    );

    if config.repair && !maze.check() {
        let flips = fix(&mut maze, &mut rng, &options)?;
        tracing::info!("Repaired the maze in {} flips", flips);
    }
    if config.remove_crosses {
        if maze.check() {
            let removed = remove_crosses(&mut maze);
            tracing::info!("Removed {} crosses", removed);
        } else {
            tracing::warn!("Skipping cross removal, the maze is not perfect");
        }
    }

    let mut stdout = std::io::stdout().lock();
    TextRenderer::new(config.color).render(&maze, &mut stdout)?;
    let perfect = maze.check();
    if !perfect {
        writeln!(stdout, "Incorrect")?;
    }
    if config.stats {
        write!(stdout, "{}", DegreeStats::collect(&maze))?;
    }
    if config.distances {
        if perfect {
            let dist = distance_histogram(&maze)?;
            let summary = DistanceSummary::from_histogram(&dist);
            for (k, count) in dist.iter().enumerate().filter(|(_, count)| **count > 0) {
                writeln!(stdout, "{k}: {count}")?;
            }
            writeln!(
                stdout,
                "pairs: {} mean: {:.3} diameter: {}",
                summary.pairs, summary.mean, summary.diameter
            )?;
        } else {
            tracing::warn!("Skipping distances, the maze is not perfect");
        }
    }
    if config.dump {
        write!(stdout, "{}", dump(&maze))?;
    }
    if let Some(path) = &config.svg {
        write_svg(&maze, path, &SvgStyle::default())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if config.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    // Held until exit so the file writer flushes
    let _guard = match logging::init(config.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
