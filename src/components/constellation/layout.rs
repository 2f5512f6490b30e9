//! Force-directed placement for the constellation.
//!
//! Pure math, no DOM types: the caller resolves member ids to indices and
//! hands over an explicit RNG, so the whole module is testable off-browser.

use std::f64::consts::PI;

use rand::Rng;

/// Tuning knobs for the simulation.
///
/// The defaults were arrived at by eye against real team data; none of the
/// numbers carry semantic meaning, so adjust freely rather than reading
/// intent into them.
#[derive(Clone, Debug)]
pub struct LayoutParams {
	/// Coulomb-like pairwise push, scaled by 1/distance².
	pub repulsion: f64,
	/// Hooke-like spring coefficient applied along each edge.
	pub attraction: f64,
	/// Pull toward the canvas center, keeps the graph from drifting off.
	pub gravity: f64,
	/// Per-pass velocity multiplier; must stay below 1 so the system settles.
	pub damping: f64,
	/// Fixed pass count. The loop never checks convergence or exits early.
	pub iterations: usize,
	/// Amplitude of the initial position jitter that breaks symmetry.
	pub jitter: f64,
	/// Minimum distance kept between body centers and the canvas edges.
	pub margin: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			repulsion: 2200.0,
			attraction: 0.0016,
			gravity: 0.04,
			damping: 0.85,
			iterations: 80,
			jitter: 9.0,
			margin: 30.0,
		}
	}
}

/// An edge already resolved to body indices, with its attraction weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	pub a: usize,
	pub b: usize,
	pub weight: f64,
}

/// Final canvas-space coordinates for one body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

struct Body {
	x: f64,
	y: f64,
	vx: f64,
	vy: f64,
}

/// Run the simulation for `count` bodies inside a `width` × `height` canvas
/// and return one final position per body.
///
/// Bodies start evenly spaced on a circle around the canvas center, each
/// nudged by `rng` so perfectly symmetric inputs don't produce degenerate
/// force ties. Every pass accumulates repulsion, spring attraction and center
/// gravity, then integrates with damped velocity and clamps positions to the
/// margin box — the result is always finite and in bounds.
pub fn run_layout<R: Rng>(
	count: usize,
	springs: &[Spring],
	width: f64,
	height: f64,
	params: &LayoutParams,
	rng: &mut R,
) -> Vec<Position> {
	if count == 0 {
		return Vec::new();
	}

	let (cx, cy) = (width / 2.0, height / 2.0);
	let ring = 0.35 * width.min(height);
	let mut bodies: Vec<Body> = (0..count)
		.map(|i| {
			let angle = 2.0 * PI * i as f64 / count as f64;
			Body {
				x: cx + ring * angle.cos() + rng.gen_range(-params.jitter..=params.jitter),
				y: cy + ring * angle.sin() + rng.gen_range(-params.jitter..=params.jitter),
				vx: 0.0,
				vy: 0.0,
			}
		})
		.collect();

	let max_x = (width - params.margin).max(params.margin);
	let max_y = (height - params.margin).max(params.margin);

	for _ in 0..params.iterations {
		let mut forces = vec![(0.0f64, 0.0f64); count];

		// Pairwise repulsion. Distance is floored at 1 so coincident bodies
		// don't divide by zero.
		for i in 0..count {
			for j in (i + 1)..count {
				let (dx, dy) = (bodies[i].x - bodies[j].x, bodies[i].y - bodies[j].y);
				let dist = (dx * dx + dy * dy).sqrt().max(1.0);
				let push = params.repulsion / (dist * dist);
				let (fx, fy) = (dx / dist * push, dy / dist * push);
				forces[i].0 += fx;
				forces[i].1 += fy;
				forces[j].0 -= fx;
				forces[j].1 -= fy;
			}
		}

		// Spring attraction along edges, proportional to current length.
		for spring in springs {
			if spring.a >= count || spring.b >= count {
				continue;
			}
			let (dx, dy) = (
				bodies[spring.b].x - bodies[spring.a].x,
				bodies[spring.b].y - bodies[spring.a].y,
			);
			let dist = (dx * dx + dy * dy).sqrt().max(1.0);
			let pull = params.attraction * dist * spring.weight;
			let (fx, fy) = (dx / dist * pull, dy / dist * pull);
			forces[spring.a].0 += fx;
			forces[spring.a].1 += fy;
			forces[spring.b].0 -= fx;
			forces[spring.b].1 -= fy;
		}

		// Center gravity, then damped integration with a hard boundary clamp.
		for (i, body) in bodies.iter_mut().enumerate() {
			let (mut fx, mut fy) = forces[i];
			fx += (cx - body.x) * params.gravity;
			fy += (cy - body.y) * params.gravity;

			body.vx = (body.vx + fx) * params.damping;
			body.vy = (body.vy + fy) * params.damping;
			body.x = (body.x + body.vx).clamp(params.margin, max_x);
			body.y = (body.y + body.vy).clamp(params.margin, max_y);
		}
	}

	bodies.iter().map(|b| Position { x: b.x, y: b.y }).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	const W: f64 = 800.0;
	const H: f64 = 500.0;

	fn rng(seed: u64) -> ChaCha8Rng {
		ChaCha8Rng::seed_from_u64(seed)
	}

	fn assert_in_bounds(positions: &[Position], params: &LayoutParams) {
		for pos in positions {
			assert!(pos.x.is_finite() && pos.y.is_finite(), "non-finite position {pos:?}");
			assert!(pos.x >= params.margin && pos.x <= W - params.margin, "x out of bounds: {pos:?}");
			assert!(pos.y >= params.margin && pos.y <= H - params.margin, "y out of bounds: {pos:?}");
		}
	}

	#[test]
	fn empty_graph_yields_no_positions() {
		let params = LayoutParams::default();
		let positions = run_layout(0, &[], W, H, &params, &mut rng(1));
		assert!(positions.is_empty());
	}

	#[test]
	fn single_body_stays_in_bounds() {
		let params = LayoutParams::default();
		let positions = run_layout(1, &[], W, H, &params, &mut rng(2));
		assert_eq!(positions.len(), 1);
		assert_in_bounds(&positions, &params);
	}

	#[test]
	fn positions_are_finite_and_clamped() {
		let params = LayoutParams::default();
		let springs: Vec<Spring> = (1..25)
			.map(|i| Spring { a: i - 1, b: i, weight: (i % 3) as f64 / 3.0 })
			.collect();
		let positions = run_layout(25, &springs, W, H, &params, &mut rng(3));
		assert_eq!(positions.len(), 25);
		assert_in_bounds(&positions, &params);
	}

	#[test]
	fn same_seed_reproduces_the_layout() {
		let params = LayoutParams::default();
		let springs = [Spring { a: 0, b: 1, weight: 1.0 }];
		let first = run_layout(3, &springs, W, H, &params, &mut rng(7));
		let second = run_layout(3, &springs, W, H, &params, &mut rng(7));
		assert_eq!(first, second);
	}

	#[test]
	fn different_seeds_stay_structurally_valid() {
		// Exact coordinates differ run to run; only count and bounds are
		// guaranteed.
		let params = LayoutParams::default();
		let springs = [Spring { a: 0, b: 1, weight: 1.0 }];
		for seed in 0..5 {
			let positions = run_layout(3, &springs, W, H, &params, &mut rng(seed));
			assert_eq!(positions.len(), 3);
			assert_in_bounds(&positions, &params);
		}
	}

	#[test]
	fn zero_weight_spring_matches_no_spring() {
		let params = LayoutParams::default();
		let limp = [Spring { a: 0, b: 1, weight: 0.0 }];
		let with_spring = run_layout(4, &limp, W, H, &params, &mut rng(11));
		let without = run_layout(4, &[], W, H, &params, &mut rng(11));
		assert_eq!(with_spring, without);
	}

	#[test]
	fn coincident_bodies_do_not_blow_up() {
		// A tiny canvas clamps every body into a 10px box, so pairs routinely
		// coincide; the distance floor keeps the math finite.
		let params = LayoutParams {
			jitter: 0.0,
			..LayoutParams::default()
		};
		let positions = run_layout(6, &[], 70.0, 70.0, &params, &mut rng(13));
		assert_eq!(positions.len(), 6);
		for pos in positions {
			assert!(pos.x.is_finite() && pos.y.is_finite());
		}
	}

	#[test]
	fn runs_exactly_the_configured_iteration_count() {
		// Zero iterations leaves bodies at their jittered ring positions, so
		// the ring radius is still recognizable; one hundred iterations pulls
		// the pair toward center. Either way the pass count is fixed and the
		// call terminates.
		let ring_only = LayoutParams { iterations: 0, jitter: 0.0, ..LayoutParams::default() };
		let positions = run_layout(2, &[], W, H, &ring_only, &mut rng(17));
		let ring = 0.35 * H;
		let dx = positions[0].x - W / 2.0;
		let dy = positions[0].y - H / 2.0;
		assert!(((dx * dx + dy * dy).sqrt() - ring).abs() < 1e-6);

		let long_run = LayoutParams { iterations: 100, ..LayoutParams::default() };
		let positions = run_layout(2, &[], W, H, &long_run, &mut rng(17));
		assert_eq!(positions.len(), 2);
	}
}
