// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::Grid, state::MoveState};


/// A cheapest way from the origin to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	cost: u32,
	/// State after each move; the seed at the origin isn't included.
	steps: Vec<MoveState>,
}

impl Route {
	pub(crate) fn new(cost: u32, steps: Vec<MoveState>) -> Self {
		Route { cost, steps }
	}

	pub fn cost(&self) -> u32 {
		self.cost
	}

	pub fn steps(&self) -> &[MoveState] {
		&self.steps
	}

	/// Cells entered, in order.
	pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
		self.steps.iter().map(|step| step.pos)
	}

	/// `grid` with every cell on the route replaced by the direction it was entered in.
	pub fn overlay(&self, grid: &Grid) -> String {
		use {std::collections::HashMap, itertools::Itertools as _};

		let arrows = self.steps.iter()
			.map(|step| (step.pos, step.dir.arrow()))
			.collect::<HashMap<_, _>>();

		(0..grid.height())
			.map(|y| (0..grid.width())
				.map(|x| arrows.get(&[x, y]).copied()
					.unwrap_or_else(|| (b'0' + grid.cost_at([x, y])) as char))
				.collect::<String>())
			.join("\n")
	}
}


#[cfg(test)]
pub(crate) fn assert_route_is_valid(route: &Route, grid: &Grid, limits: crate::limits::RunLimits) {
	use itertools::Itertools as _;

	let Some(last) = route.steps.last() else {
		assert_eq!((grid.origin(), route.cost), (grid.target(), 0));
		return
	};
	assert_eq!(last.pos, grid.target());
	assert!(last.can_stop(limits), "stopped after {} block(s)", last.run);
	assert_eq!(route.cost, route.positions().map(|pos| grid.cost_at(pos) as u32).sum::<u32>());
	assert!(route.steps.iter().all(|step| (1..=limits.max()).contains(&step.run)));

	let first = route.steps[0];
	assert_eq!((first.run, first.dir.step(grid.origin())), (1, Some(first.pos)));

	for (prev, next) in route.steps.iter().tuple_windows() {
		assert_eq!(next.dir.step(prev.pos), Some(next.pos));
		if next.dir == prev.dir {
			assert_eq!(next.run, prev.run + 1);
		} else {
			assert!(prev.dir.turns().contains(&next.dir));
			assert!(prev.run >= limits.min() && next.run == 1);
		}
	}
}

#[test]
fn tests() {
	use crate::{dir::Dir, limits::RunLimits};

	let grid = "19\n11".parse::<Grid>().unwrap();
	let route = Route::new(2, vec![
		MoveState { pos: [0, 1], dir: Dir::Down, run: 1 },
		MoveState { pos: [1, 1], dir: Dir::Right, run: 1 },
	]);
	assert_route_is_valid(&route, &grid, RunLimits::CRUCIBLE);
	assert_eq!(route.positions().collect::<Vec<_>>(), [[0, 1], [1, 1]]);
	assert_eq!(route.overlay(&grid), "19\nv>");
	assert_eq!(Route::new(0, vec![]).overlay(&grid), grid.to_string());
}
