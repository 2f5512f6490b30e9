use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::layout::{self, LayoutParams, Spring};
use super::types::TeamGraph;

const TIER_COLORS: &[&str] = &[
	"#ffd166", "#4cc9f0", "#f72585", "#80ed99", "#b388eb", "#ff9770",
];

pub const MIN_RADIUS: f64 = 4.0;
pub const MAX_RADIUS: f64 = 16.0;
/// Stars at or above this radius get a name label next to them.
pub const LABEL_MIN_RADIUS: f64 = 7.0;
/// Members at or above this activity level get a glow halo.
pub const GLOW_THRESHOLD: f64 = 0.6;
/// Extra reach around a star's radius when hit-testing the pointer.
pub const HIT_MARGIN: f64 = 6.0;

/// One laid-out member star, ready to draw and hit-test.
#[derive(Clone, Debug)]
pub struct Star {
	pub name: String,
	pub score: f64,
	pub tier: String,
	pub joined_days_ago: u32,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: &'static str,
	pub glow: bool,
}

/// A drawable relationship, endpoints resolved to star indices.
#[derive(Clone, Debug)]
pub struct StarLink {
	pub a: usize,
	pub b: usize,
	pub weight: f64,
	pub kind: String,
}

/// The finished constellation for one view activation. Built fresh every time
/// the view activates and dropped when it goes away; nothing is cached.
pub struct ConstellationState {
	pub stars: Vec<Star>,
	pub links: Vec<StarLink>,
	pub width: f64,
	pub height: f64,
}

impl ConstellationState {
	/// Resolve the wire graph, run the layout and derive display attributes.
	///
	/// Returns `None` when there are no members — nothing to lay out or draw.
	/// Edges whose endpoints are unknown are dropped here and never reach the
	/// simulation or the renderer.
	pub fn new(
		graph: &TeamGraph,
		width: f64,
		height: f64,
		params: &LayoutParams,
		seed: u64,
	) -> Option<Self> {
		if graph.nodes.is_empty() {
			return None;
		}

		let id_to_idx: HashMap<&str, usize> = graph
			.nodes
			.iter()
			.enumerate()
			.map(|(i, member)| (member.id.as_str(), i))
			.collect();

		let links: Vec<StarLink> = graph
			.edges
			.iter()
			.filter_map(|edge| {
				let a = *id_to_idx.get(edge.source.as_str())?;
				let b = *id_to_idx.get(edge.target.as_str())?;
				Some(StarLink { a, b, weight: edge.weight, kind: edge.kind.clone() })
			})
			.collect();

		let springs: Vec<Spring> = links
			.iter()
			.map(|link| Spring { a: link.a, b: link.b, weight: link.weight })
			.collect();

		let mut rng = ChaCha8Rng::seed_from_u64(seed);
		let positions =
			layout::run_layout(graph.nodes.len(), &springs, width, height, params, &mut rng);

		let stars = graph
			.nodes
			.iter()
			.zip(positions)
			.map(|(member, pos)| Star {
				name: member.name.clone(),
				score: member.score,
				tier: member.tier.clone(),
				joined_days_ago: member.joined_days_ago,
				x: pos.x,
				y: pos.y,
				radius: star_radius(member.size),
				color: tier_color(&member.tier),
				glow: member.activity_level >= GLOW_THRESHOLD,
			})
			.collect();

		Some(Self { stars, links, width, height })
	}

	/// Map client (device) coordinates onto canvas space. The canvas element
	/// may be CSS-scaled, so the bounding-rect ratio matters, not just the
	/// offset.
	pub fn pointer_to_canvas(
		&self,
		client_x: f64,
		client_y: f64,
		rect_left: f64,
		rect_top: f64,
		rect_width: f64,
		rect_height: f64,
	) -> (f64, f64) {
		if rect_width <= 0.0 || rect_height <= 0.0 {
			return (client_x - rect_left, client_y - rect_top);
		}
		(
			(client_x - rect_left) * self.width / rect_width,
			(client_y - rect_top) * self.height / rect_height,
		)
	}

	/// First star whose radius-plus-margin circle contains the point.
	pub fn star_at(&self, x: f64, y: f64) -> Option<&Star> {
		self.stars.iter().find(|star| {
			let (dx, dy) = (star.x - x, star.y - y);
			let reach = star.radius + HIT_MARGIN;
			dx * dx + dy * dy < reach * reach
		})
	}
}

fn star_radius(size: f64) -> f64 {
	(MIN_RADIUS + size).clamp(MIN_RADIUS, MAX_RADIUS)
}

fn tier_color(tier: &str) -> &'static str {
	// Stable per tier name across re-renders; unknown tiers still land on a
	// palette entry instead of a sentinel color.
	let hash: usize = tier.bytes().map(usize::from).sum();
	TIER_COLORS[hash % TIER_COLORS.len()]
}
