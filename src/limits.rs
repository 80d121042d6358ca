// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// How many blocks a crucible must (`min`) and may (`max`) move in a straight
/// line before turning. Also, it can only stop at the end after `min` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunLimits {
	min: usize,
	max: usize,
}

impl RunLimits {
	pub const CRUCIBLE: RunLimits = RunLimits { min: 1, max: 3 };
	pub const ULTRA_CRUCIBLE: RunLimits = RunLimits { min: 4, max: 10 };

	pub fn new(min: usize, max: usize) -> Result<Self, LimitsError> {
		if min == 0 { return Err(LimitsError::ZeroMin) }
		if min > max { return Err(LimitsError::MinAboveMax { min, max }) }
		Ok(RunLimits { min, max })
	}

	pub fn min(&self) -> usize {
		self.min
	}

	pub fn max(&self) -> usize {
		self.max
	}
}

impl std::fmt::Display for RunLimits {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}..={}", self.min, self.max)
	}
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitsError {
	ZeroMin,
	MinAboveMax { min: usize, max: usize },
}

impl std::fmt::Display for LimitsError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LimitsError::ZeroMin => write!(f, "Minimum run must be at least 1."),
			LimitsError::MinAboveMax { min, max } =>
				write!(f, "Minimum run({min}) exceeds maximum run({max})."),
		}
	}
}

impl std::error::Error for LimitsError {}


#[test]
fn tests() {
	assert_eq!(RunLimits::new(1, 3), Ok(RunLimits::CRUCIBLE));
	assert_eq!(RunLimits::new(4, 10), Ok(RunLimits::ULTRA_CRUCIBLE));
	assert_eq!(RunLimits::new(2, 2).map(|l| [l.min(), l.max()]), Ok([2, 2]));
	assert_eq!(RunLimits::new(0, 3), Err(LimitsError::ZeroMin));
	assert_eq!(RunLimits::new(0, 0), Err(LimitsError::ZeroMin));
	assert_eq!(RunLimits::new(4, 3), Err(LimitsError::MinAboveMax { min: 4, max: 3 }));
	assert_eq!(RunLimits::ULTRA_CRUCIBLE.to_string(), "4..=10");
}
