//! Reactive pane state written by the controller and read by the components.

use leptos::prelude::*;

use super::controller::{Pane, PaneRenderer};
use crate::config::RenderOptions;
use crate::data::GraphModel;

/// What a pane currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PaneView {
	#[default]
	Loading,
	Ready(GraphModel),
	Failed(String),
}

/// [`PaneRenderer`] backed by Leptos signals. Each call swaps the whole
/// pane value, so the components redraw from scratch.
#[derive(Clone, Copy, Debug)]
pub struct PaneSignals {
	pub index: RwSignal<PaneView>,
	pub working: RwSignal<PaneView>,
	pub options: RwSignal<RenderOptions>,
}

impl PaneSignals {
	pub fn new(options: RenderOptions) -> Self {
		Self {
			index: RwSignal::new(PaneView::default()),
			working: RwSignal::new(PaneView::default()),
			options: RwSignal::new(options),
		}
	}

	fn pane(&self, pane: Pane) -> RwSignal<PaneView> {
		match pane {
			Pane::Index => self.index,
			Pane::Working => self.working,
		}
	}

	fn show(&self, pane: Pane, model: &GraphModel, options: &RenderOptions) {
		if self.options.with_untracked(|current| current != options) {
			self.options.set(options.clone());
		}
		self.pane(pane).set(PaneView::Ready(model.clone()));
	}
}

impl PaneRenderer for PaneSignals {
	fn render_index(&self, model: &GraphModel, options: &RenderOptions) {
		self.show(Pane::Index, model, options);
	}

	fn render_working(&self, model: &GraphModel, options: &RenderOptions) {
		self.show(Pane::Working, model, options);
	}

	fn show_error(&self, pane: Pane, message: &str) {
		self.pane(pane).set(PaneView::Failed(message.to_string()));
	}
}
