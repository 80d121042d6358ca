use clumsy_crucible::{Engine, Grid, RunLimits, dijkstra, solve};
use itertools::Itertools as _;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_grid(rng: &mut StdRng) -> Grid {
	let [width, height] = [rng.random_range(1..=8), rng.random_range(1..=8)];
	(0..height)
		.map(|_| (0..width).map(|_| char::from(b'0' + rng.random_range(0..=9u8))).collect::<String>())
		.join("\n")
		.parse()
		.unwrap()
}

#[test]
fn frontier_and_heap_agree() {
	let mut rng = StdRng::seed_from_u64(17);
	let configs = (1..=4)
		.flat_map(|min| (min..=4).map(move |max| RunLimits::new(min, max).unwrap()))
		.collect::<Vec<_>>();

	for _ in 0..200 {
		let grid = random_grid(&mut rng);
		for &limits in &configs {
			let heap = solve(&grid, limits, Engine::Heap, None);
			assert_eq!(solve(&grid, limits, Engine::Frontier, None), heap, "{limits}\n{grid}");
			assert_eq!(solve(&grid, limits, Engine::Heap, None), heap);

			if let Ok(route) = dijkstra::shortest_route(&grid, limits) {
				assert_eq!(Ok(route.cost()), heap);
				assert_eq!(route.cost(), route.positions().map(|pos| grid.cost_at(pos) as u32).sum());
				assert!(route.steps().iter().all(|step| step.run <= limits.max()));
			}
		}
	}
}
