//! Ownership of the two rendering targets.
//!
//! The index pane is re-rendered wholesale on every dataset selection. The
//! working pane goes `Uninitialized -> Initialized` exactly once; the only
//! way back is [`PaneController::reinitialize_working`].

use std::cell::{Ref, RefCell};

use log::{error, info, warn};
use serde_json::Value;

use crate::config::RenderOptions;
use crate::data::GraphModel;
use crate::error::{Result, VizError};

/// The two panes on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pane {
	Index,
	Working,
}

/// The drawing side of the panes. Implementations own all visual output;
/// every call replaces what the pane showed before.
pub trait PaneRenderer {
	fn render_index(&self, model: &GraphModel, options: &RenderOptions);
	fn render_working(&self, model: &GraphModel, options: &RenderOptions);
	/// Put `pane` into a visible error state.
	fn show_error(&self, pane: Pane, message: &str);
}

/// Partitioned scratch data held for the working pane's lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkingPaneState {
	model: Option<GraphModel>,
}

impl WorkingPaneState {
	pub fn is_initialized(&self) -> bool {
		self.model.is_some()
	}

	pub fn model(&self) -> Option<&GraphModel> {
		self.model.as_ref()
	}

	pub fn promoted(&self) -> &[Value] {
		self.model.as_ref().map(GraphModel::promoted).unwrap_or_default()
	}

	pub fn attached(&self) -> &[Value] {
		self.model.as_ref().map(GraphModel::attached).unwrap_or_default()
	}

	pub fn unattached(&self) -> &[Value] {
		self.model.as_ref().map(GraphModel::unattached).unwrap_or_default()
	}

	fn reset(&mut self) {
		self.model = None;
	}
}

/// Routes models to the renderer and guards the working pane's lifecycle.
pub struct PaneController<R> {
	renderer: R,
	working: RefCell<WorkingPaneState>,
}

impl<R: PaneRenderer> PaneController<R> {
	pub fn new(renderer: R, working: WorkingPaneState) -> Self {
		Self {
			renderer,
			working: RefCell::new(working),
		}
	}

	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	/// Replace the index pane's content with `model`. Never touches the
	/// working pane.
	pub fn render_index(&self, model: &GraphModel, options: &RenderOptions) {
		info!(
			"triage-viz: rendering index pane ({} top-level keys)",
			model.raw().fields().len()
		);
		self.renderer.render_index(model, options);
	}

	/// First call renders the working pane and keeps `model`; later calls
	/// fail with [`VizError::WorkingPaneAlreadyInitialized`] and change nothing.
	pub fn init_working(&self, model: GraphModel, options: &RenderOptions) -> Result<()> {
		let mut working = self.working.borrow_mut();
		if working.is_initialized() {
			warn!("triage-viz: ignoring repeated working pane initialization");
			return Err(VizError::WorkingPaneAlreadyInitialized);
		}
		info!(
			"triage-viz: initializing working pane ({} promoted, {} attached, {} unattached)",
			model.promoted().len(),
			model.attached().len(),
			model.unattached().len()
		);
		self.renderer.render_working(&model, options);
		working.model = Some(model);
		Ok(())
	}

	/// Explicitly drop the working pane's state and initialize it again.
	pub fn reinitialize_working(&self, model: GraphModel, options: &RenderOptions) -> Result<()> {
		self.working.borrow_mut().reset();
		self.init_working(model, options)
	}

	pub fn working_state(&self) -> Ref<'_, WorkingPaneState> {
		self.working.borrow()
	}

	/// Log `err` and show it in `pane` only.
	pub fn report_error(&self, pane: Pane, err: &VizError) {
		error!("triage-viz: {:?} pane: {}", pane, err);
		self.renderer.show_error(pane, &err.to_string());
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::data::{RawDocument, normalize};
	use serde_json::json;

	/// Records every renderer call in order.
	#[derive(Default)]
	pub(crate) struct RecordingRenderer {
		pub(crate) calls: RefCell<Vec<RenderCall>>,
	}

	#[derive(Clone, Debug, PartialEq)]
	pub(crate) enum RenderCall {
		Index(GraphModel),
		Working(GraphModel),
		Error(Pane, String),
	}

	impl RecordingRenderer {
		pub(crate) fn index_renders(&self) -> Vec<GraphModel> {
			self.calls
				.borrow()
				.iter()
				.filter_map(|c| match c {
					RenderCall::Index(m) => Some(m.clone()),
					_ => None,
				})
				.collect()
		}

		pub(crate) fn errors(&self) -> Vec<(Pane, String)> {
			self.calls
				.borrow()
				.iter()
				.filter_map(|c| match c {
					RenderCall::Error(p, msg) => Some((*p, msg.clone())),
					_ => None,
				})
				.collect()
		}

		pub(crate) fn working_renders(&self) -> usize {
			self.calls
				.borrow()
				.iter()
				.filter(|c| matches!(c, RenderCall::Working(_)))
				.count()
		}
	}

	impl PaneRenderer for RecordingRenderer {
		fn render_index(&self, model: &GraphModel, _options: &RenderOptions) {
			self.calls.borrow_mut().push(RenderCall::Index(model.clone()));
		}

		fn render_working(&self, model: &GraphModel, _options: &RenderOptions) {
			self.calls.borrow_mut().push(RenderCall::Working(model.clone()));
		}

		fn show_error(&self, pane: Pane, message: &str) {
			self.calls
				.borrow_mut()
				.push(RenderCall::Error(pane, message.to_string()));
		}
	}

	fn scratch() -> GraphModel {
		normalize(
			RawDocument::from_value(json!({
				"promoted": [{"G_id": "p"}],
				"attached": [{"G_id": "a"}, {"G_id": "b"}],
				"unattached": []
			}))
			.unwrap(),
		)
	}

	#[test]
	fn init_working_stores_partitions() {
		let controller = PaneController::new(RecordingRenderer::default(), WorkingPaneState::default());
		assert!(!controller.working_state().is_initialized());

		controller.init_working(scratch(), &RenderOptions::default()).unwrap();

		let state = controller.working_state();
		assert!(state.is_initialized());
		assert_eq!(state.promoted().len(), 1);
		assert_eq!(state.attached().len(), 2);
		assert!(state.unattached().is_empty());
		assert_eq!(state.model().unwrap().raw(), scratch().raw());
	}

	#[test]
	fn second_init_is_rejected_and_changes_nothing() {
		let controller = PaneController::new(RecordingRenderer::default(), WorkingPaneState::default());
		let options = RenderOptions::default();
		controller.init_working(scratch(), &options).unwrap();

		let other = normalize(RawDocument::default());
		assert_eq!(
			controller.init_working(other, &options),
			Err(VizError::WorkingPaneAlreadyInitialized)
		);
		assert_eq!(controller.renderer().working_renders(), 1);
		assert_eq!(controller.working_state().attached().len(), 2);
	}

	#[test]
	fn reinitialize_replaces_working_state() {
		let controller = PaneController::new(RecordingRenderer::default(), WorkingPaneState::default());
		let options = RenderOptions::default();
		controller.init_working(scratch(), &options).unwrap();
		controller
			.reinitialize_working(normalize(RawDocument::default()), &options)
			.unwrap();
		assert_eq!(controller.renderer().working_renders(), 2);
		assert!(controller.working_state().attached().is_empty());
	}

	#[test]
	fn render_index_leaves_working_pane_alone() {
		let controller = PaneController::new(RecordingRenderer::default(), WorkingPaneState::default());
		let options = RenderOptions::default();
		controller.init_working(scratch(), &options).unwrap();
		controller.render_index(&normalize(RawDocument::default()), &options);
		controller.report_error(Pane::Index, &VizError::UnknownDataset("x".into()));

		assert_eq!(controller.renderer().working_renders(), 1);
		assert_eq!(controller.renderer().index_renders().len(), 1);
		assert_eq!(controller.renderer().errors()[0].0, Pane::Index);
		assert_eq!(controller.working_state().promoted().len(), 1);
	}
}
