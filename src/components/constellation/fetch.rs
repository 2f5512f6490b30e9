use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, Response};

use super::types::TeamGraph;

/// Why a constellation payload could not be produced.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("network error: {0}")]
	Network(String),
	#[error("unexpected HTTP status {0}")]
	Status(u16),
	#[error("malformed payload: {0}")]
	Decode(#[from] serde_json::Error),
}

fn js_error(value: JsValue) -> FetchError {
	FetchError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// GET the team graph as JSON. The caller's abort signal travels with the
/// request, so a torn-down view can cancel it mid-flight.
pub async fn load_team_graph(url: &str, signal: &AbortSignal) -> Result<TeamGraph, FetchError> {
	let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;

	let init = RequestInit::new();
	init.set_signal(Some(signal));
	let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;

	let response: Response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(js_error)?
		.dyn_into()
		.map_err(js_error)?;
	if !response.ok() {
		return Err(FetchError::Status(response.status()));
	}

	let body = JsFuture::from(response.text().map_err(js_error)?)
		.await
		.map_err(js_error)?;
	let text = body.as_string().unwrap_or_default();
	Ok(serde_json::from_str(&text)?)
}
