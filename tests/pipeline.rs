use mazegen::{
    analysis::{DegreeStats, DistanceSummary, distance_histogram},
    generators::{FractalKind, Generator, generate_maze, get_rng},
    maze::{EdgeState, Maze},
    render::{SvgStyle, dump, to_svg},
    repair::{RepairOptions, fix, remove_crosses},
    stamp::{stamp_at, stamp_stretched},
};

fn hard_walls(maze: &Maze) -> usize {
    maze.edges()
        .filter(|&edge| maze[edge] == EdgeState::HardWall)
        .count()
}

#[test]
fn stretched_pattern_survives_generation() {
    let mut rng = get_rng(Some(11));
    let mut pattern = Maze::new(3, 3).unwrap();
    generate_maze(&mut pattern, Generator::Wilson, &mut rng).unwrap();

    let mut maze = Maze::new(12, 12).unwrap();
    let stamped = stamp_stretched(&mut maze, &pattern).unwrap();
    assert_eq!(hard_walls(&maze), stamped);

    for generator in [
        Generator::RecurBacktrack,
        Generator::Wilson,
        Generator::Random,
    ] {
        generate_maze(&mut maze, generator, &mut rng).unwrap();
        assert!(maze.check(), "{generator} broke the stamped maze");
        assert_eq!(hard_walls(&maze), stamped);
    }
}

#[test]
fn pattern_at_offset_must_fit() {
    let pattern = Maze::new(4, 4).unwrap();
    let mut maze = Maze::new(6, 6).unwrap();
    assert!(stamp_at(&mut maze, &pattern, 3, 0).is_err());
    assert_eq!(hard_walls(&maze), 0);
    assert!(stamp_at(&mut maze, &pattern, 2, 2).is_ok());
}

#[test]
fn fractal_then_repair_and_analyze() {
    let mut rng = get_rng(Some(8));
    let mut maze = Maze::new(16, 16).unwrap();
    generate_maze(
        &mut maze,
        Generator::Fractal(FractalKind::AllRandom),
        &mut rng,
    )
    .unwrap();
    if !maze.check() {
        let options = RepairOptions::for_maze(&maze);
        fix(&mut maze, &mut rng, &options).unwrap();
    }
    assert!(maze.check());

    remove_crosses(&mut maze);
    assert!(maze.check());
    assert_eq!(DegreeStats::collect(&maze).degree(4), 0);

    let dist = distance_histogram(&maze).unwrap();
    let n = maze.cell_count() as u64;
    let summary = DistanceSummary::from_histogram(&dist);
    assert_eq!(summary.pairs, n * (n - 1) / 2);
    assert_eq!(summary.diameter, dist.len() - 1);
    assert!(summary.mean >= 1.0);
}

#[test]
fn renderers_describe_the_same_maze() {
    let mut maze = Maze::new(5, 3).unwrap();
    generate_maze(&mut maze, Generator::RecurSplit, &mut get_rng(Some(4))).unwrap();

    let drawing = maze.to_string();
    assert_eq!(drawing.lines().count(), 2 * 3 + 1);
    assert!(drawing.lines().all(|line| line.len() == 2 * 5 + 1));

    let listing = dump(&maze);
    assert_eq!(listing.lines().count(), 3);

    let svg = to_svg(&maze, &SvgStyle::default());
    assert!(svg.starts_with("<svg width=\"60\" height=\"40\""));
}

#[test]
fn imperfect_maze_is_rejected_by_analysis() {
    let mut maze = Maze::new(3, 3).unwrap();
    maze.fill_walls();
    assert!(!maze.check());
    assert!(distance_histogram(&maze).is_err());
}
