// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::{grid::Grid, limits::RunLimits, search::SearchError, state::MoveState};


/// Summary of one expansion round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
	/// 1-based.
	pub index: usize,
	/// States left to expand in the next round.
	pub frontier_len: usize,
	pub best: Option<u32>,
}

/// Label-correcting search: every round expands all states found in the
/// previous one, keeping only successors that improve on both the best cost
/// known for that exact state and the best cost known for the target.
///
/// Cell costs are non-negative and improvements are strict, so the frontier
/// eventually runs dry. Iterating yields a [`Round`] per expansion.
pub struct Frontier<'g> {
	grid: &'g Grid,
	limits: RunLimits,
	states: Vec<MoveState>,
	best_costs: HashMap<MoveState, u32>,
	best: Option<u32>,
	rounds: usize,
}

impl<'g> Frontier<'g> {
	pub fn new(grid: &'g Grid, limits: RunLimits) -> Self {
		let states = MoveState::seeds().to_vec();
		let best_costs = states.iter().map(|&state| (state, 0)).collect();
		let best = (grid.origin() == grid.target() && limits.min() <= 1).then_some(0);
		Frontier { grid, limits, states, best_costs, best, rounds: 0 }
	}

	/// Lowest cost at which the target has been reached so far.
	pub fn best(&self) -> Option<u32> {
		self.best
	}

	/// Runs rounds until the frontier is empty, or gives up after
	/// `max_rounds` if given.
	pub fn run(mut self, max_rounds: Option<usize>) -> Result<u32, SearchError> {
		while let Some(round) = self.next() {
			#[cfg(LOGGING)]
			println!("round {}: {} states, best {:?}", round.index, round.frontier_len, round.best);

			if round.frontier_len > 0 && max_rounds.is_some_and(|max| round.index >= max) {
				return Err(SearchError::RoundLimit { rounds: round.index, best: round.best })
			}
		}

		self.best.ok_or(SearchError::NoPath)
	}
}

impl Iterator for Frontier<'_> {
	type Item = Round;

	fn next(&mut self) -> Option<Round> {
		use std::collections::hash_map::Entry;

		if self.states.is_empty() { return None }

		let target = self.grid.target();
		let mut next_states = vec![];

		for state in std::mem::take(&mut self.states) {
			let cost = self.best_costs[&state];

			for next in state.successors(self.grid, self.limits) {
				let next_cost = cost + u32::from(self.grid.cost_at(next.pos));
				if self.best.is_some_and(|best| next_cost >= best) { continue }

				match self.best_costs.entry(next) {
					Entry::Occupied(entry) if *entry.get() <= next_cost => continue,
					Entry::Occupied(mut entry) => { entry.insert(next_cost); }
					Entry::Vacant(entry) => { entry.insert(next_cost); }
				}

				if next.pos == target && next.can_stop(self.limits) {
					self.best = Some(next_cost);
				}

				next_states.push(next);
			}
		}

		self.states = next_states;
		self.rounds += 1;

		Some(Round { index: self.rounds, frontier_len: self.states.len(), best: self.best })
	}
}


#[test]
fn tests() {
	use itertools::Itertools as _;

	let grid = crate::search::EXAMPLES[0].parse::<Grid>().unwrap();

	for (limits, expected) in [(RunLimits::CRUCIBLE, 102), (RunLimits::ULTRA_CRUCIBLE, 94)] {
		let mut frontier = Frontier::new(&grid, limits);
		let rounds = frontier.by_ref().collect::<Vec<_>>();
		assert_eq!(frontier.best(), Some(expected));
		assert_eq!(rounds.last().map(|r| (r.frontier_len, r.best)), Some((0, Some(expected))));
		assert!(rounds.iter().enumerate().all(|(i, r)| r.index == i + 1));
		assert!(rounds.iter().tuple_windows().all(|(r0, r1)| match (r0.best, r1.best) {
			(Some(b0), Some(b1)) => b1 <= b0,
			(Some(_), None) => false,
			(None, _) => true,
		}));
		assert_eq!(frontier.next(), None);
	}

	// Staircase of ones
	let grid = indoc::indoc! { "
		19999
		11999
		91199
		99119
		99911
	" }.parse::<Grid>().unwrap();
	assert_eq!(Frontier::new(&grid, RunLimits::new(1, 1).unwrap()).run(None), Ok(8));
	assert_eq!(Frontier::new(&grid, RunLimits::CRUCIBLE).run(None), Ok(8));
	assert_eq!(Frontier::new(&grid, RunLimits::new(1, 1).unwrap()).run(Some(9)), Ok(8));
	assert!(matches!(Frontier::new(&grid, RunLimits::new(1, 1).unwrap()).run(Some(7)),
		Err(SearchError::RoundLimit { rounds: 7, .. })));
}
