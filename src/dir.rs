// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Cardinal direction of travel; `y` grows downwards.
///
/// The derived ordering (`Up < Right < Down < Left`) doubles as the tie-break
/// between otherwise equal search states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dir { Up, Right, Down, Left }

impl Dir {
	pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

	/// Unit displacement as `[dx, dy]`.
	pub fn delta(self) -> [isize; 2] {
		match self {
			Dir::Up => [0, -1],
			Dir::Right => [1, 0],
			Dir::Down => [0, 1],
			Dir::Left => [-1, 0],
		}
	}

	/// The two perpendicular directions, in a fixed order.
	pub fn turns(self) -> [Dir; 2] {
		use Dir::*;
		match self {
			Up | Down => [Left, Right],
			Left | Right => [Up, Down],
		}
	}

	pub fn opposite(self) -> Dir {
		use Dir::*;
		match self { Up => Down, Right => Left, Down => Up, Left => Right }
	}

	pub fn arrow(self) -> char {
		match self { Dir::Up => '^', Dir::Right => '>', Dir::Down => 'v', Dir::Left => '<' }
	}

	/// Position one step from `pos`, unless that would go below zero on either axis.
	pub fn step(self, pos: [usize; 2]) -> Option<[usize; 2]> {
		let ([x, y], [dx, dy]) = (pos, self.delta());
		Some([x.checked_add_signed(dx)?, y.checked_add_signed(dy)?])
	}
}


#[cfg(test)]
use test_case::test_case;

#[cfg(test)]
#[test_case(Dir::Up => [Dir::Left, Dir::Right])]
#[test_case(Dir::Down => [Dir::Left, Dir::Right])]
#[test_case(Dir::Left => [Dir::Up, Dir::Down])]
#[test_case(Dir::Right => [Dir::Up, Dir::Down])]
fn turn_pairs(dir: Dir) -> [Dir; 2] {
	dir.turns()
}

#[cfg(test)]
#[test_case(Dir::Up, [3, 0] => None)]
#[test_case(Dir::Left, [0, 3] => None)]
#[test_case(Dir::Up, [3, 1] => Some([3, 0]))]
#[test_case(Dir::Right, [3, 1] => Some([4, 1]))]
#[test_case(Dir::Down, [3, 1] => Some([3, 2]))]
#[test_case(Dir::Left, [3, 1] => Some([2, 1]))]
fn steps(dir: Dir, pos: [usize; 2]) -> Option<[usize; 2]> {
	dir.step(pos)
}

#[test]
fn tests() {
	for dir in Dir::ALL {
		assert_eq!(dir.opposite().opposite(), dir);
		assert!(!dir.turns().contains(&dir));
		assert!(!dir.turns().contains(&dir.opposite()));
		let [dx, dy] = dir.delta();
		let [ox, oy] = dir.opposite().delta();
		assert_eq!([dx + ox, dy + oy], [0, 0]);
		assert_eq!(dx.abs() + dy.abs(), 1);
	}
}
