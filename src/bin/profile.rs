use std::time::{Duration, Instant};

use mazegen::{
    generators::{Generator, generate_maze, get_rng},
    maze::Maze,
};

const SEED: u64 = 0x5eed;

fn main() -> mazegen::error::Result<()> {
    let _guard = mazegen::logging::init(None)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(200);
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);

    println!("{size}x{size}, {num_iters} run(s) per generator");
    for generator in Generator::ALL {
        let mut rng = get_rng(Some(SEED));
        let mut total = Duration::ZERO;
        let mut perfect = true;
        for _ in 0..num_iters {
            let mut maze = Maze::new(size, size)?;
            let start = Instant::now();
            generate_maze(&mut maze, generator, &mut rng)?;
            total += start.elapsed();
            perfect &= maze.check();
        }
        println!(
            "{:<32} {:>10.3} ms{}",
            generator.to_string(),
            total.as_secs_f64() * 1000.0 / num_iters as f64,
            if perfect { "" } else { "  (not perfect)" }
        );
    }
    Ok(())
}
