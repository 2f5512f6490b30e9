use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::controller::ConstellationController;
use super::fetch;
use super::layout::LayoutParams;
use super::render;
use super::state::ConstellationState;

/// Design-time canvas size. CSS may still scale the element; hit-testing
/// corrects for that via the bounding rect.
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 500.0;

/// Tooltip payload for the star under the pointer, positioned in CSS pixels
/// relative to the canvas wrapper.
#[derive(Clone, Debug, PartialEq)]
struct TooltipData {
	name: String,
	score: f64,
	tier: String,
	joined_days_ago: u32,
	x: f64,
	y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ViewStatus {
	Loading,
	Ready,
	Empty,
	Failed,
}

/// Fetches the team graph, lays it out once and renders the result into a
/// canvas. Hovering a star shows a tooltip with the member's details.
#[component]
pub fn ConstellationCanvas(
	#[prop(into)] url: String,
	#[prop(default = CANVAS_WIDTH)] width: f64,
	#[prop(default = CANVAS_HEIGHT)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let controller: Rc<RefCell<ConstellationController>> =
		Rc::new(RefCell::new(ConstellationController::new()));
	let (status, set_status) = signal(ViewStatus::Loading);
	let (tooltip, set_tooltip) = signal(None::<TooltipData>);

	let controller_load = controller.clone();
	Effect::new(move |_| {
		// No canvas element, nothing to draw on.
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(abort) = controller_load.borrow_mut().start() else {
			return;
		};
		let url = url.clone();
		let controller_async = controller_load.clone();
		spawn_local(async move {
			let result = fetch::load_team_graph(&url, &abort.signal()).await;
			if controller_async.borrow().is_disposed() {
				// The view tore down mid-flight; leave the DOM alone.
				return;
			}
			let graph = match result {
				Ok(graph) => graph,
				Err(err) => {
					warn!("constellation load failed: {err}");
					set_status.set(ViewStatus::Failed);
					return;
				}
			};

			let seed = js_sys::Date::now() as u64;
			let Some(state) =
				ConstellationState::new(&graph, width, height, &LayoutParams::default(), seed)
			else {
				set_status.set(ViewStatus::Empty);
				return;
			};

			if let Ok(Some(obj)) = canvas.get_context("2d") {
				if let Ok(ctx) = obj.dyn_into::<CanvasRenderingContext2d>() {
					render::render(&state, &ctx);
					set_status.set(ViewStatus::Ready);
				}
			}
			controller_async.borrow_mut().set_state(state);
		});
	});

	let controller_hover = controller.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let controller = controller_hover.borrow();
		let Some(state) = controller.state() else {
			return;
		};

		let (x, y) = state.pointer_to_canvas(
			ev.client_x() as f64,
			ev.client_y() as f64,
			rect.left(),
			rect.top(),
			rect.width(),
			rect.height(),
		);
		set_tooltip.set(state.star_at(x, y).map(|star| TooltipData {
			name: star.name.clone(),
			score: star.score,
			tier: star.tier.clone(),
			joined_days_ago: star.joined_days_ago,
			x: ev.client_x() as f64 - rect.left(),
			y: ev.client_y() as f64 - rect.top(),
		}));
	};

	let on_mouseleave = move |_: MouseEvent| set_tooltip.set(None);

	let controller_cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(controller.clone());
	on_cleanup(move || controller_cleanup.borrow_mut().dispose());

	view! {
		<div class="constellation-wrap">
			<canvas
				node_ref=canvas_ref
				class="constellation-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
			/>
			{move || match status.get() {
				ViewStatus::Loading => {
					Some(view! { <p class="constellation-message">"Charting the constellation..."</p> })
				}
				ViewStatus::Failed => {
					Some(view! { <p class="constellation-message">"Failed to load constellation data."</p> })
				}
				ViewStatus::Empty => {
					Some(view! { <p class="constellation-message">"No team members to display yet."</p> })
				}
				ViewStatus::Ready => None,
			}}
			{move || {
				tooltip.get().map(|tip| {
					view! {
						<div
							class="constellation-tooltip"
							style=format!("left: {}px; top: {}px;", tip.x + 14.0, tip.y + 14.0)
						>
							<strong>{tip.name.clone()}</strong>
							<span>{format!("{} tier", tip.tier)}</span>
							<span>{format!("{:.0} points", tip.score)}</span>
							<span>{format!("joined {} days ago", tip.joined_days_ago)}</span>
						</div>
					}
				})
			}}
		</div>
	}
}
