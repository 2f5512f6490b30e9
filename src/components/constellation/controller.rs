use web_sys::AbortController;

use super::state::ConstellationState;

/// Owns one view activation: the abort handle for the in-flight fetch and the
/// laid-out state, with an explicit lifecycle instead of ambient globals.
///
/// `start` hands out the abort controller for a new load, `stop` cancels the
/// load, `dispose` ends the activation for good. Async callers must re-check
/// `is_disposed` after every await before touching the canvas or the DOM.
#[derive(Default)]
pub struct ConstellationController {
	state: Option<ConstellationState>,
	abort: Option<AbortController>,
	disposed: bool,
}

impl ConstellationController {
	pub fn new() -> Self {
		Self::default()
	}

	/// Begin a new load, cancelling any previous one. Returns `None` once
	/// disposed or when the browser refuses to hand out an abort controller.
	pub fn start(&mut self) -> Option<AbortController> {
		if self.disposed {
			return None;
		}
		self.stop();
		let abort = AbortController::new().ok()?;
		self.abort = Some(abort.clone());
		Some(abort)
	}

	/// Abort the in-flight fetch, if any.
	pub fn stop(&mut self) {
		if let Some(abort) = self.abort.take() {
			abort.abort();
		}
	}

	/// Stop and mark the activation dead; later `start` and `set_state` calls
	/// become no-ops.
	pub fn dispose(&mut self) {
		self.stop();
		self.state = None;
		self.disposed = true;
	}

	pub fn is_disposed(&self) -> bool {
		self.disposed
	}

	pub fn set_state(&mut self, state: ConstellationState) {
		if !self.disposed {
			self.state = Some(state);
		}
	}

	pub fn state(&self) -> Option<&ConstellationState> {
		self.state.as_ref()
	}
}
