// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{dijkstra, frontier::Frontier, grid::Grid, limits::RunLimits};


/// Which search to run; both find the same minimal cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Engine {
	/// Dijkstra over (position, direction, run) states.
	#[default]
	Heap,
	/// Round-by-round label-correcting search.
	Frontier,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
	/// The target can't be reached within the run limits.
	NoPath,
	/// The frontier was still non-empty after `rounds` rounds.
	RoundLimit { rounds: usize, best: Option<u32> },
}

impl std::fmt::Display for SearchError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SearchError::NoPath => write!(f, "No path reaches the target."),
			SearchError::RoundLimit { rounds, best: Some(best) } =>
				write!(f, "Gave up after {rounds} round(s), best cost so far {best}."),
			SearchError::RoundLimit { rounds, best: None } =>
				write!(f, "Gave up after {rounds} round(s) without reaching the target."),
		}
	}
}

impl std::error::Error for SearchError {}


/// Minimal cost from the top-left to the bottom-right of `grid`.
///
/// `max_rounds` only caps [`Engine::Frontier`]; the heap search always
/// settles every state at most once.
pub fn solve(grid: &Grid, limits: RunLimits, engine: Engine, max_rounds: Option<usize>)
-> Result<u32, SearchError> {
	match engine {
		Engine::Heap => dijkstra::min_cost(grid, limits),
		Engine::Frontier => Frontier::new(grid, limits).run(max_rounds),
	}
}

/// Solves `grid` for every one of `configs` in parallel, returning results
/// in the same order.
pub fn solve_all(
	grid: &Grid,
	configs: &[RunLimits],
	engine: Engine,
	max_rounds: Option<usize>,
) -> Vec<Result<u32, SearchError>> {
	use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};
	configs.par_iter()
		.map(|&limits| solve(grid, limits, engine, max_rounds))
		.collect()
}


#[cfg(test)]
pub(crate) const EXAMPLES: [&str; 2] = [
	indoc::indoc! { "
		2413432311323
		3215453535623
		3255245654254
		3446585845452
		4546657867536
		1438598798454
		4457876987766
		3637877979653
		4654967986887
		4564679986453
		1224686865563
		2546548887735
		4322674655533
	" },
	indoc::indoc! { "
		111111111111
		999999999991
		999999999991
		999999999991
		999999999991
	" },
];

#[cfg(test)]
use test_case::test_case;

#[cfg(test)]
#[test_case(0, RunLimits::CRUCIBLE, Engine::Heap => Ok(102))]
#[test_case(0, RunLimits::CRUCIBLE, Engine::Frontier => Ok(102))]
#[test_case(0, RunLimits::ULTRA_CRUCIBLE, Engine::Heap => Ok(94))]
#[test_case(0, RunLimits::ULTRA_CRUCIBLE, Engine::Frontier => Ok(94))]
#[test_case(1, RunLimits::ULTRA_CRUCIBLE, Engine::Heap => Ok(71))]
#[test_case(1, RunLimits::ULTRA_CRUCIBLE, Engine::Frontier => Ok(71))]
fn examples(example: usize, limits: RunLimits, engine: Engine) -> Result<u32, SearchError> {
	solve(&EXAMPLES[example].parse().unwrap(), limits, engine, None)
}

#[test]
fn tests() {
	let grid = EXAMPLES[0].parse::<Grid>().unwrap();
	let configs = [
		RunLimits::ULTRA_CRUCIBLE,
		RunLimits::CRUCIBLE,
		RunLimits::new(12, 13).unwrap(),
		RunLimits::new(2, 5).unwrap(),
	];
	for engine in [Engine::Heap, Engine::Frontier] {
		let sequential = configs.iter()
			.map(|&limits| solve(&grid, limits, engine, None))
			.collect::<Vec<_>>();
		let parallel = solve_all(&grid, &configs, engine, None);
		assert_eq!(parallel, sequential);
		// Along the top & right edges is the only way for 12..=13
		assert_eq!(parallel[..3], [Ok(94), Ok(102), Ok(30 + 49)]);
	}

	// Idempotent
	assert_eq!(solve(&grid, RunLimits::CRUCIBLE, Engine::Frontier, None),
		solve(&grid, RunLimits::CRUCIBLE, Engine::Frontier, None));
	assert_eq!(solve(&grid, RunLimits::CRUCIBLE, Engine::Heap, None),
		solve(&grid, RunLimits::CRUCIBLE, Engine::Heap, None));

	assert_eq!(solve(&grid, RunLimits::CRUCIBLE, Engine::Frontier, Some(2)),
		Err(SearchError::RoundLimit { rounds: 2, best: None }));
	assert_eq!(solve(&grid, RunLimits::CRUCIBLE, Engine::Heap, Some(2)), Ok(102));
}
