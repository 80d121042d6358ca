// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{dir::Dir, grid::Grid, limits::RunLimits};


/// Search node: where the crucible is, where it's heading, and how many
/// blocks it has moved in that direction since its last turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveState {
	pub pos: [usize; 2],
	pub dir: Dir,
	pub run: usize,
}

impl MoveState {
	/// Both ways out of the origin, before having moved at all.
	///
	/// These are the only states with a zero `run`; as every [`RunLimits`]
	/// has a minimum of at least one, they may go straight but never turn.
	pub fn seeds() -> [MoveState; 2] {
		[Dir::Right, Dir::Down].map(|dir| MoveState { pos: [0, 0], dir, run: 0 })
	}

	pub fn can_turn(&self, limits: RunLimits) -> bool {
		self.run >= limits.min()
	}

	/// Whether the crucible may come to a halt here.
	pub fn can_stop(&self, limits: RunLimits) -> bool {
		self.run >= limits.min()
	}

	/// One block further ahead, if the maximum run allows it.
	pub fn straight(self, limits: RunLimits) -> Option<MoveState> {
		if self.run >= limits.max() { return None }
		Some(MoveState { pos: self.dir.step(self.pos)?, run: self.run + 1, ..self })
	}

	/// One block towards `dir`, which must be perpendicular to the current
	/// heading, after having completed the minimum run.
	pub fn turn(self, dir: Dir, limits: RunLimits) -> Option<MoveState> {
		assert!(self.can_turn(limits),
			"turning after {} block(s), minimum is {}", self.run, limits.min());
		assert!(self.dir.turns().contains(&dir),
			"turning {dir:?} while heading {:?}", self.dir);
		Some(MoveState { pos: dir.step(self.pos)?, dir, run: 1 })
	}

	/// All states reachable within `grid` by a single move.
	pub fn successors<'g>(self, grid: &'g Grid, limits: RunLimits)
	-> impl Iterator<Item = MoveState> + 'g {
		use {std::iter::empty, either::Either};

		let turns = if self.can_turn(limits) {
			Either::Left(self.dir.turns().into_iter().filter_map(move |dir| self.turn(dir, limits)))
		} else {
			Either::Right(empty())
		};

		self.straight(limits).into_iter()
			.chain(turns)
			.filter(move |next| grid.contains(next.pos))
	}
}


#[cfg(test)]
use test_case::test_case;

#[cfg(test)]
#[test_case([1, 1], Dir::Right, 0, RunLimits::CRUCIBLE => vec![([2, 1], Dir::Right, 1)])]
#[test_case([1, 1], Dir::Right, 3, RunLimits::CRUCIBLE
	=> vec![([1, 0], Dir::Up, 1), ([1, 2], Dir::Down, 1)])]
#[test_case([1, 1], Dir::Down, 2, RunLimits::CRUCIBLE
	=> vec![([1, 2], Dir::Down, 3), ([0, 1], Dir::Left, 1), ([2, 1], Dir::Right, 1)])]
#[test_case([0, 0], Dir::Down, 1, RunLimits::CRUCIBLE
	=> vec![([0, 1], Dir::Down, 2), ([1, 0], Dir::Right, 1)])]
#[test_case([2, 2], Dir::Right, 1, RunLimits::CRUCIBLE => vec![([2, 1], Dir::Up, 1)])]
#[test_case([0, 1], Dir::Down, 3, RunLimits::ULTRA_CRUCIBLE => vec![([0, 2], Dir::Down, 4)])]
fn successors_in_3x3(pos: [usize; 2], dir: Dir, run: usize, limits: RunLimits)
-> Vec<([usize; 2], Dir, usize)> {
	let grid = "123\n456\n789".parse::<Grid>().unwrap();
	MoveState { pos, dir, run }.successors(&grid, limits)
		.map(|s| (s.pos, s.dir, s.run))
		.collect()
}

#[test]
fn tests() {
	let limits = RunLimits::new(2, 3).unwrap();
	for seed in MoveState::seeds() {
		assert_eq!((seed.pos, seed.run), ([0, 0], 0));
		assert!(!seed.can_turn(limits) && !seed.can_stop(limits));
	}
	assert_eq!(MoveState::seeds().map(|s| s.dir), [Dir::Right, Dir::Down]);

	let state = MoveState { pos: [5, 5], dir: Dir::Left, run: 2 };
	assert!(state.can_turn(limits) && state.can_stop(limits));
	assert_eq!(state.straight(limits), Some(MoveState { pos: [4, 5], dir: Dir::Left, run: 3 }));
	assert_eq!(state.straight(limits).and_then(|s| s.straight(limits)), None);
	assert_eq!(state.turn(Dir::Up, limits), Some(MoveState { pos: [5, 4], dir: Dir::Up, run: 1 }));
	assert_eq!(MoveState { pos: [0, 5], dir: Dir::Left, run: 1 }.straight(limits), None);
}

#[test]
#[should_panic(expected = "minimum")]
fn turn_before_minimum_run() {
	MoveState { pos: [5, 5], dir: Dir::Left, run: 1 }.turn(Dir::Up, RunLimits::ULTRA_CRUCIBLE);
}

#[test]
#[should_panic(expected = "while heading")]
fn turn_backwards() {
	MoveState { pos: [5, 5], dir: Dir::Left, run: 1 }.turn(Dir::Right, RunLimits::CRUCIBLE);
}
