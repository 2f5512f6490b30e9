use leptos::prelude::*;

use crate::components::constellation::ConstellationCanvas;

/// Where the dashboard API serves the team graph.
const CONSTELLATION_URL: &str = "/api/constellation";

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="dashboard">
				<div class="dashboard-header">
					<h1>"Team Constellation"</h1>
					<p class="subtitle">"Every star is a team member. Hover one to see who it is."</p>
				</div>
				<ConstellationCanvas url=CONSTELLATION_URL />
			</div>
		</ErrorBoundary>
	}
}
