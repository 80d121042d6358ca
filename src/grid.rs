// Copyright (c) 2022 Bastiaan Marinus van de Weerd


pub use parsing::GridError;

/// City block map: the cost of entering each cell, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
	costs: Vec<u8>,
	width: usize,
}

impl Grid {
	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.costs.len() / self.width
	}

	pub fn contains(&self, [x, y]: [usize; 2]) -> bool {
		x < self.width && y < self.height()
	}

	/// Cost of entering `pos`, which must be in bounds.
	pub fn cost_at(&self, pos: [usize; 2]) -> u8 {
		assert!(self.contains(pos), "{pos:?} outside {}x{} grid", self.width, self.height());
		self.costs[pos[1] * self.width + pos[0]]
	}

	pub fn get(&self, pos: [usize; 2]) -> Option<u8> {
		self.contains(pos).then(|| self.costs[pos[1] * self.width + pos[0]])
	}

	pub fn origin(&self) -> [usize; 2] {
		[0, 0]
	}

	pub fn target(&self) -> [usize; 2] {
		[self.width - 1, self.height() - 1]
	}
}


mod parsing {
	use std::{fmt, str::FromStr};
	use super::Grid;

	#[derive(Debug, Clone, PartialEq, Eq)]
	pub enum GridError {
		Empty,
		LineLen { line: usize, len: Option<usize>, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl fmt::Display for GridError {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			match self {
				GridError::Empty => write!(f, "Grid has no rows."),
				GridError::LineLen { line, len: Some(len), found } =>
					write!(f, "Expected {len} cell(s) on line {line}, found {found}."),
				GridError::LineLen { line, len: None, found } =>
					write!(f, "Unexpected length {found} of line {line}."),
				GridError::InvalidByte { line, column, found } =>
					write!(f, "Invalid byte {:?} at line {line}, column {column}.",
						char::from(*found)),
			}
		}
	}

	impl std::error::Error for GridError {}

	impl FromStr for Grid {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut costs = vec![];
			let mut width = None;

			for (l, line) in s.lines().enumerate() {

				macro_rules! ret_line_len_err { ( $found:expr ) => {
					return Err(GridError::LineLen { line: l + 1, len: width, found: $found })
				} }

				for (c, b) in line.bytes().enumerate() {
					match b {
						_ if Some(c) == width => ret_line_len_err!(line.len()),
						found if !found.is_ascii_digit() =>
							return Err(GridError::InvalidByte { line: l + 1, column: c + 1, found }),
						cost => costs.push(cost - b'0'),
					}
				}

				match width {
					None if line.is_empty() => ret_line_len_err!(0),
					None => width = Some(line.len()),
					Some(len) => if line.len() != len { ret_line_len_err!(line.len()) }
				}
			}

			let Some(width) = width else { return Err(GridError::Empty) };
			Ok(Grid { costs, width })
		}
	}
}


impl std::fmt::Display for Grid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		for (y, row) in self.costs.chunks(self.width).enumerate() {
			if y > 0 { f.write_char('\n')? }
			for &cost in row { f.write_char((b'0' + cost) as char)? }
		}
		Ok(())
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		241
		321
		325
		344
	" };
	let grid = INPUT.parse::<Grid>().unwrap();
	assert_eq!([grid.width(), grid.height()], [3, 4]);
	assert_eq!([grid.origin(), grid.target()], [[0, 0], [2, 3]]);
	assert_eq!(grid.cost_at([1, 0]), 4);
	assert_eq!(grid.cost_at([2, 2]), 5);
	assert!(grid.contains([2, 3]));
	assert!(!grid.contains([3, 0]));
	assert!(!grid.contains([0, 4]));
	assert_eq!(grid.get([0, 3]), Some(3));
	assert_eq!(grid.get([0, 4]), None);
	assert_eq!(grid.to_string(), INPUT.trim_end());

	assert_eq!("7".parse::<Grid>().map(|g| g.target()), Ok([0, 0]));
	assert_eq!("12\r\n34\r\n".parse::<Grid>().map(|g| g.cost_at([1, 1])), Ok(4));

	assert_eq!("".parse::<Grid>(), Err(GridError::Empty));
	assert_eq!("12\n\n34".parse::<Grid>(),
		Err(GridError::LineLen { line: 2, len: Some(2), found: 0 }));
	assert_eq!("\n12".parse::<Grid>(),
		Err(GridError::LineLen { line: 1, len: None, found: 0 }));
	assert_eq!("123\n1234\n".parse::<Grid>(),
		Err(GridError::LineLen { line: 2, len: Some(3), found: 4 }));
	assert_eq!("123\n12\n".parse::<Grid>(),
		Err(GridError::LineLen { line: 2, len: Some(3), found: 2 }));
	assert_eq!("123\n1x3\n".parse::<Grid>(),
		Err(GridError::InvalidByte { line: 2, column: 2, found: b'x' }));
	assert_eq!("12 \n".parse::<Grid>(),
		Err(GridError::InvalidByte { line: 1, column: 3, found: b' ' }));
}

#[test]
#[should_panic]
fn cost_outside_grid() {
	"12\n34".parse::<Grid>().unwrap().cost_at([2, 0]);
}
