// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Cheapest way to push a crucible from the top-left to the bottom-right of a
//! city block map, when it must move at least some and at most some number
//! of blocks in a straight line before turning.

pub mod dijkstra;
pub mod dir;
pub mod frontier;
pub mod grid;
pub mod limits;
pub mod route;
pub mod search;
pub mod state;

pub use {
	dir::Dir,
	frontier::{Frontier, Round},
	grid::{Grid, GridError},
	limits::{LimitsError, RunLimits},
	route::Route,
	search::{Engine, SearchError, solve, solve_all},
	state::MoveState,
};
