// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::Grid, limits::RunLimits, route::Route, search::SearchError, state::MoveState};


/// Cheapest route from the top-left to the bottom-right of `grid`.
///
/// Dijkstra over (position, direction, run) states. Equal costs are popped in
/// [`MoveState`] order, so the same grid always yields the same route.
pub fn shortest_route(grid: &Grid, limits: RunLimits) -> Result<Route, SearchError> {
	use std::{cmp::Ordering, collections::{BinaryHeap, HashMap, hash_map::Entry}};

	#[derive(PartialEq, Eq)]
	struct Visit {
		cost: u32,
		state: MoveState,
		/// Index into `nodes`.
		node: usize,
	}

	impl PartialOrd for Visit {
		fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
			Some(self.cmp(other))
		}
	}

	impl Ord for Visit {
		fn cmp(&self, other: &Self) -> Ordering {
			self.cost.cmp(&other.cost).reverse()
				.then_with(|| self.state.cmp(&other.state).reverse())
				.then_with(|| self.node.cmp(&other.node).reverse())
		}
	}

	let target = grid.target();
	if grid.origin() == target && limits.min() <= 1 { return Ok(Route::new(0, vec![])) }

	// Every state ever pushed, with the index of the state it was reached from
	let mut nodes = Vec::<(MoveState, Option<usize>)>::new();
	let mut best_costs = HashMap::new();
	let mut heap = BinaryHeap::new();

	for state in MoveState::seeds() {
		best_costs.insert(state, 0);
		heap.push(Visit { cost: 0, state, node: nodes.len() });
		nodes.push((state, None));
	}

	while let Some(Visit { cost, state, node }) = heap.pop() {
		if best_costs.get(&state).is_some_and(|&best| best < cost) { continue }

		if state.pos == target && state.can_stop(limits) {
			let mut steps = std::iter::successors(Some(node), |&n| nodes[n].1)
				.filter_map(|n| nodes[n].1.map(|_| nodes[n].0))
				.collect::<Vec<_>>();
			steps.reverse();
			let route = Route::new(cost, steps);

			#[cfg(LOGGING)]
			println!("{:?} @ {cost} after {} pushes\n{}", state, nodes.len(), route.overlay(grid));

			return Ok(route)
		}

		for next in state.successors(grid, limits) {
			let next_cost = cost + u32::from(grid.cost_at(next.pos));
			match best_costs.entry(next) {
				Entry::Occupied(entry) if *entry.get() <= next_cost => continue,
				Entry::Occupied(mut entry) => { entry.insert(next_cost); }
				Entry::Vacant(entry) => { entry.insert(next_cost); }
			}
			heap.push(Visit { cost: next_cost, state: next, node: nodes.len() });
			nodes.push((next, Some(node)));
		}
	}

	Err(SearchError::NoPath)
}

pub fn min_cost(grid: &Grid, limits: RunLimits) -> Result<u32, SearchError> {
	shortest_route(grid, limits).map(|route| route.cost())
}


#[cfg(test)]
use test_case::test_case;

#[cfg(test)]
#[test_case("5", RunLimits::CRUCIBLE => Ok(0) ; "single cell")]
#[test_case("5", RunLimits::new(2, 3).unwrap() => Err(SearchError::NoPath) ; "single cell too short")]
#[test_case("12\n34", RunLimits::new(1, 1).unwrap() => Ok(6) ; "zig-zag")]
#[test_case("1\n2\n3", RunLimits::new(1, 1).unwrap() => Err(SearchError::NoPath) ; "corridor too long")]
#[test_case("1\n2\n3", RunLimits::new(1, 2).unwrap() => Ok(5) ; "corridor")]
#[test_case("1\n2\n3", RunLimits::new(3, 4).unwrap() => Err(SearchError::NoPath) ; "corridor too short")]
#[test_case("123\n456\n789", RunLimits::new(4, 10).unwrap() => Err(SearchError::NoPath) ; "square too small")]
#[test_case("123\n456\n789", RunLimits::new(2, 2).unwrap() => Ok(20) ; "square")]
#[test_case("000\n000\n000", RunLimits::CRUCIBLE => Ok(0) ; "free")]
fn small_grids(input: &str, limits: RunLimits) -> Result<u32, SearchError> {
	let grid = input.parse::<Grid>().unwrap();
	let route = shortest_route(&grid, limits);
	if let Ok(route) = &route { crate::route::assert_route_is_valid(route, &grid, limits) }
	assert_eq!(route.as_ref().map(Route::cost).map_err(Clone::clone),
		crate::frontier::Frontier::new(&grid, limits).run(None));
	route.map(|route| route.cost())
}

#[test]
fn tests() {
	let grid = crate::search::EXAMPLES[0].parse::<Grid>().unwrap();
	for (limits, expected) in [(RunLimits::CRUCIBLE, 102), (RunLimits::ULTRA_CRUCIBLE, 94)] {
		let route = shortest_route(&grid, limits).unwrap();
		assert_eq!(route.cost(), expected);
		crate::route::assert_route_is_valid(&route, &grid, limits);
		assert_eq!(shortest_route(&grid, limits), Ok(route));
	}

	let grid = crate::search::EXAMPLES[1].parse::<Grid>().unwrap();
	let route = shortest_route(&grid, RunLimits::ULTRA_CRUCIBLE).unwrap();
	assert_eq!(route.overlay(&grid), indoc::indoc! { "
		1>>>>>>>1111
		9999999v9991
		9999999v9991
		9999999v9991
		9999999v>>>>
	" }.trim_end());
}
