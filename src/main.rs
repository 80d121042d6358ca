// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use itertools::Itertools as _;
use clumsy_crucible::{Engine, Grid, RunLimits, dijkstra, solve, solve_all};


#[derive(Debug, Parser)]
#[command(about = "Minimal heat loss of a crucible across a city block map")]
struct CLIArgs {
	input_path: PathBuf,
	/// Blocks to move in a straight line before being able to turn or stop.
	#[arg(long, requires = "max_run")]
	min_run: Option<usize>,
	/// Blocks to move in a straight line before having to turn.
	#[arg(long, requires = "min_run")]
	max_run: Option<usize>,
	#[arg(long, value_enum, default_value_t)]
	engine: Engine,
	/// Give up after this many frontier rounds.
	#[arg(long)]
	max_rounds: Option<usize>,
	/// Also print the route taken.
	#[arg(long, requires = "min_run")]
	route: bool,
}


fn read_grid(args: &CLIArgs) -> Result<Grid> {
	let input = std::fs::read_to_string(&args.input_path)
		.with_context(|| format!("Failed to open given file({}).", args.input_path.display()))?;
	let grid = input.parse::<Grid>()
		.with_context(|| format!("Failed to read grid from given file({}).",
			args.input_path.display()))?;
	Ok(grid)
}

fn main() -> Result<()> {
	let args = CLIArgs::parse();
	let grid = read_grid(&args)?;

	let Some(limits) = args.min_run.zip(args.max_run)
		.map(|(min, max)| RunLimits::new(min, max))
		.transpose()? else {
		let configs = [RunLimits::CRUCIBLE, RunLimits::ULTRA_CRUCIBLE];
		let costs = solve_all(&grid, &configs, args.engine, args.max_rounds)
			.into_iter()
			.collect::<Result<Vec<_>, _>>()?;
		println!("{}", costs.iter()
			.enumerate()
			.map(|(i, cost)| format!("part {}: {cost}", i + 1))
			.join(", "));
		return Ok(())
	};

	if args.route {
		if args.engine != Engine::Heap { bail!("Only the heap engine keeps track of routes.") }
		let route = dijkstra::shortest_route(&grid, limits)?;
		println!("{}", route.cost());
		println!("{}", route.overlay(&grid));
	} else {
		println!("{}", solve(&grid, limits, args.engine, args.max_rounds)?);
	}

	Ok(())
}
