use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ConstellationState, LABEL_MIN_RADIUS};

const BACKGROUND: &str = "#0b1026";
const DOT_COUNT: usize = 70;

/// Draw the finished constellation: background and decorative dots first,
/// then edges underneath the stars.
pub fn render(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_background_dots(state, ctx);
	draw_links(state, ctx);
	draw_stars(state, ctx);
}

/// Fixed formula over the dot index, so the backdrop never shimmers between
/// re-renders.
fn dot_noise(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	x as f64 / 233280.0
}

fn draw_background_dots(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	for i in 0..DOT_COUNT {
		let x = dot_noise(i * 4) * state.width;
		let y = dot_noise(i * 4 + 1) * state.height;
		let radius = 0.5 + dot_noise(i * 4 + 2);
		let alpha = 0.05 + 0.2 * dot_noise(i * 4 + 3);
		ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha));
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

// Relationship flavor only tints the line; visibility always follows weight.
fn link_tint(kind: &str) -> (u8, u8, u8) {
	match kind {
		"rival" => (255, 150, 160),
		"mentor" => (255, 214, 102),
		_ => (140, 170, 255),
	}
}

fn draw_links(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(1.0);
	for link in &state.links {
		let (a, b) = (&state.stars[link.a], &state.stars[link.b]);
		let (r, g, bl) = link_tint(&link.kind);
		let alpha = 0.1 + 0.5 * link.weight.clamp(0.0, 1.0);
		ctx.set_stroke_style_str(&format!("rgba({}, {}, {}, {})", r, g, bl, alpha));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_stars(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	for star in &state.stars {
		if star.glow {
			let glow_radius = star.radius * 2.2;
			if let Ok(gradient) = ctx.create_radial_gradient(
				star.x,
				star.y,
				star.radius * 0.3,
				star.x,
				star.y,
				glow_radius,
			) {
				let _ = gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.35)");
				let _ = gradient.add_color_stop(0.6, "rgba(200, 220, 255, 0.12)");
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(star.x, star.y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, star.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(star.color);
		ctx.fill();

		if star.radius >= LABEL_MIN_RADIUS {
			ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
			ctx.set_font("11px sans-serif");
			let _ = ctx.fill_text(&star.name, star.x + star.radius + 3.0, star.y + 3.0);
		}
	}
}
