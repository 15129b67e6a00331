//! Dataset selection: key -> URL -> fetch -> normalize -> render.
//!
//! Each selection takes a token from a monotonically increasing counter. When
//! a fetch resolves after a newer selection has started, its result is
//! dropped, so overlapping selections never render out of order.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};

use super::controller::{Pane, PaneController, PaneRenderer};
use crate::config::RenderOptions;
use crate::data::model::normalize_with;
use crate::data::{DataSource, DatasetRegistry, NormalizeMode};
use crate::error::{Result, VizError};

/// What happened to a selection that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
	/// The index pane now shows the selected dataset.
	Rendered,
	/// A newer selection superseded this one; nothing was rendered.
	Stale,
}

struct RouterInner<S, R> {
	registry: DatasetRegistry,
	source: S,
	panes: PaneController<R>,
	options: RenderOptions,
	mode: NormalizeMode,
	latest: Cell<u64>,
}

/// Cheap-to-clone handle driving both panes from user selections.
pub struct SelectionRouter<S, R> {
	inner: Rc<RouterInner<S, R>>,
}

impl<S, R> Clone for SelectionRouter<S, R> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<S: DataSource, R: PaneRenderer> SelectionRouter<S, R> {
	pub fn new(
		registry: DatasetRegistry,
		source: S,
		panes: PaneController<R>,
		options: RenderOptions,
	) -> Self {
		Self::with_mode(registry, source, panes, options, NormalizeMode::default())
	}

	pub fn with_mode(
		registry: DatasetRegistry,
		source: S,
		panes: PaneController<R>,
		options: RenderOptions,
		mode: NormalizeMode,
	) -> Self {
		Self {
			inner: Rc::new(RouterInner {
				registry,
				source,
				panes,
				options,
				mode,
				latest: Cell::new(0),
			}),
		}
	}

	pub fn registry(&self) -> &DatasetRegistry {
		&self.inner.registry
	}

	pub fn source(&self) -> &S {
		&self.inner.source
	}

	pub fn panes(&self) -> &PaneController<R> {
		&self.inner.panes
	}

	pub fn options(&self) -> &RenderOptions {
		&self.inner.options
	}

	/// Load the dataset registered under `key` into the index pane.
	///
	/// Unknown keys fail with [`VizError::UnknownDataset`] without fetching.
	/// Failures of the current selection are shown on the index pane; the
	/// working pane is never touched.
	pub async fn on_select(&self, key: &str) -> Result<SelectOutcome> {
		let inner = &self.inner;
		// Even a failed lookup supersedes selections still in flight.
		let token = inner.latest.get() + 1;
		inner.latest.set(token);
		let url = match inner.registry.url_for(key) {
			Ok(url) => url.to_string(),
			Err(e) => {
				inner.panes.report_error(Pane::Index, &e);
				return Err(e);
			}
		};

		info!("triage-viz: dataset {:?} selected, fetching {} (request {})", key, url, token);

		let fetched = inner.source.fetch(&url).await;
		if inner.latest.get() != token {
			debug!(
				"triage-viz: discarding response for request {} (latest is {})",
				token,
				inner.latest.get()
			);
			return Ok(SelectOutcome::Stale);
		}

		match fetched.and_then(|doc| normalize_with(doc, inner.mode)) {
			Ok(model) => {
				inner.panes.render_index(&model, &inner.options);
				Ok(SelectOutcome::Rendered)
			}
			Err(e) => {
				inner.panes.report_error(Pane::Index, &e);
				Err(e)
			}
		}
	}

	/// Fetch the scratch document at `url` and initialize the working pane
	/// with it. Failures are shown on the working pane only, except a repeated
	/// initialization, which leaves the pane as it is.
	pub async fn load_working(&self, url: &str) -> Result<()> {
		let inner = &self.inner;
		info!("triage-viz: fetching working pane data from {}", url);
		let result = inner
			.source
			.fetch(url)
			.await
			.and_then(|doc| normalize_with(doc, inner.mode))
			.and_then(|model| inner.panes.init_working(model, &inner.options));
		match result {
			Err(VizError::WorkingPaneAlreadyInitialized) | Ok(()) => {}
			Err(ref e) => inner.panes.report_error(Pane::Working, e),
		}
		result
	}

	/// [`load_working`](Self::load_working) from the registry's scratch URL.
	pub async fn load_scratch(&self) -> Result<()> {
		let url = self.inner.registry.scratch_url().to_string();
		self.load_working(&url).await
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;
	use std::future::Future;

	use futures::channel::oneshot;
	use futures::executor::{LocalPool, block_on};
	use futures::task::LocalSpawnExt;
	use pretty_assertions::assert_eq;
	use serde_json::{Value, json};

	use super::*;
	use crate::data::{RawDocument, normalize};
	use crate::error::FetchError;
	use crate::panes::controller::WorkingPaneState;
	use crate::panes::controller::tests::{RecordingRenderer, RenderCall};

	/// Serves fixed documents and records every requested URL.
	#[derive(Default)]
	struct StaticSource {
		docs: HashMap<String, Value>,
		requests: RefCell<Vec<String>>,
	}

	impl StaticSource {
		fn with(mut self, url: &str, doc: Value) -> Self {
			self.docs.insert(url.to_string(), doc);
			self
		}
	}

	impl DataSource for StaticSource {
		async fn fetch(&self, url: &str) -> Result<RawDocument> {
			self.requests.borrow_mut().push(url.to_string());
			match self.docs.get(url) {
				Some(doc) => RawDocument::from_value(doc.clone()),
				None => Err(FetchError::Status {
					url: url.to_string(),
					status: 404,
				}
				.into()),
			}
		}
	}

	/// Holds every fetch open until the test resolves it.
	#[derive(Default)]
	struct GatedSource {
		pending: RefCell<Vec<(String, oneshot::Sender<Result<RawDocument>>)>>,
	}

	impl GatedSource {
		fn resolve(&self, url: &str, doc: Value) {
			let mut pending = self.pending.borrow_mut();
			let pos = pending.iter().position(|(u, _)| u == url).unwrap();
			let (_, tx) = pending.remove(pos);
			tx.send(RawDocument::from_value(doc)).unwrap();
		}
	}

	impl DataSource for GatedSource {
		fn fetch(&self, url: &str) -> impl Future<Output = Result<RawDocument>> {
			let (tx, rx) = oneshot::channel();
			self.pending.borrow_mut().push((url.to_string(), tx));
			let url = url.to_string();
			async move {
				rx.await.unwrap_or_else(|_| {
					Err(FetchError::Network {
						url,
						message: "cancelled".into(),
					}
					.into())
				})
			}
		}
	}

	fn router<S: DataSource>(source: S) -> SelectionRouter<S, RecordingRenderer> {
		SelectionRouter::new(
			DatasetRegistry::default(),
			source,
			PaneController::new(RecordingRenderer::default(), WorkingPaneState::default()),
			RenderOptions::default(),
		)
	}

	#[test]
	fn selecting_task_fetches_and_renders_once() {
		let task = json!({"name": "Task List", "children": []});
		let router = router(StaticSource::default().with("data/taskIndex.json", task.clone()));

		let outcome = block_on(router.on_select("task")).unwrap();

		assert_eq!(outcome, SelectOutcome::Rendered);
		assert_eq!(*router.source().requests.borrow(), vec!["data/taskIndex.json".to_string()]);
		let renders = router.panes().renderer().index_renders();
		assert_eq!(renders, vec![normalize(RawDocument::from_value(task).unwrap())]);
	}

	#[test]
	fn later_selection_replaces_index_content() {
		let router = router(
			StaticSource::default()
				.with("data/taskIndex.json", json!({"name": "tasks"}))
				.with("data/meIndex.json", json!({"name": "me"})),
		);
		block_on(router.on_select("task")).unwrap();
		block_on(router.on_select("me")).unwrap();

		let renders = router.panes().renderer().index_renders();
		assert_eq!(renders.len(), 2);
		assert_eq!(renders[1].raw().get("name"), Some(&json!("me")));
	}

	#[test]
	fn unknown_key_fails_without_fetching() {
		let router = router(StaticSource::default());
		let err = block_on(router.on_select("weather")).unwrap_err();

		assert_eq!(err, VizError::UnknownDataset("weather".into()));
		assert!(router.source().requests.borrow().is_empty());
		let errors = router.panes().renderer().errors();
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].0, Pane::Index);
	}

	#[test]
	fn failed_index_load_leaves_working_pane_intact() {
		let scratch = json!({"promoted": [{"G_id": "p"}], "attached": [], "unattached": []});
		let router = router(StaticSource::default().with("data/scratch.json", scratch));
		block_on(router.load_scratch()).unwrap();

		let err = block_on(router.on_select("impact")).unwrap_err();

		assert!(matches!(err, VizError::Fetch(FetchError::Status { status: 404, .. })));
		let renderer = router.panes().renderer();
		assert_eq!(renderer.errors().iter().map(|(p, _)| *p).collect::<Vec<_>>(), vec![Pane::Index]);
		assert_eq!(renderer.working_renders(), 1);
		assert_eq!(router.panes().working_state().promoted().len(), 1);
	}

	#[test]
	fn stale_response_is_discarded() {
		let router = router(GatedSource::default());
		let mut pool = LocalPool::new();
		let spawner = pool.spawner();
		let outcomes = Rc::new(RefCell::new(Vec::new()));

		for key in ["sighting", "company"] {
			let (router, outcomes) = (router.clone(), outcomes.clone());
			spawner
				.spawn_local(async move {
					let outcome = router.on_select(key).await;
					outcomes.borrow_mut().push((key, outcome));
				})
				.unwrap();
		}
		pool.run_until_stalled();
		assert_eq!(router.source().pending.borrow().len(), 2);

		// Newer request resolves first, then the older one.
		router.source().resolve("data/companyIndex.json", json!({"name": "company"}));
		pool.run_until_stalled();
		router.source().resolve("data/sightingIndex.json", json!({"name": "sighting"}));
		pool.run_until_stalled();

		let renders = router.panes().renderer().index_renders();
		assert_eq!(renders.len(), 1);
		assert_eq!(renders[0].raw().get("name"), Some(&json!("company")));
		assert_eq!(
			*outcomes.borrow(),
			vec![
				("company", Ok(SelectOutcome::Rendered)),
				("sighting", Ok(SelectOutcome::Stale)),
			]
		);
	}

	#[test]
	fn stale_failure_is_not_reported() {
		let router = router(GatedSource::default());
		let mut pool = LocalPool::new();
		let spawner = pool.spawner();
		for key in ["task", "event"] {
			let router = router.clone();
			spawner
				.spawn_local(async move {
					let _ = router.on_select(key).await;
				})
				.unwrap();
		}
		pool.run_until_stalled();

		// Dropping the sender fails the older fetch after it went stale.
		let (_, tx) = router.source().pending.borrow_mut().remove(0);
		drop(tx);
		pool.run_until_stalled();
		router.source().resolve("data/eventIndex.json", json!({}));
		pool.run_until_stalled();

		let renderer = router.panes().renderer();
		assert!(renderer.errors().is_empty());
		assert_eq!(renderer.index_renders().len(), 1);
	}

	#[test]
	fn working_pane_initializes_once() {
		let scratch = json!({"attached": [{"G_id": "a"}]});
		let router = router(StaticSource::default().with("data/scratch.json", scratch));

		block_on(router.load_scratch()).unwrap();
		let err = block_on(router.load_scratch()).unwrap_err();

		assert_eq!(err, VizError::WorkingPaneAlreadyInitialized);
		let renderer = router.panes().renderer();
		assert_eq!(renderer.working_renders(), 1);
		assert!(renderer.errors().is_empty());
		assert!(matches!(renderer.calls.borrow().last(), Some(RenderCall::Working(_))));
		assert!(router.panes().working_state().is_initialized());
	}

	#[test]
	fn unknown_key_supersedes_pending_selection() {
		let router = router(GatedSource::default());
		let mut pool = LocalPool::new();
		let outcome = Rc::new(RefCell::new(None));
		{
			let (router, outcome) = (router.clone(), outcome.clone());
			pool.spawner()
				.spawn_local(async move {
					*outcome.borrow_mut() = Some(router.on_select("task").await);
				})
				.unwrap();
		}
		pool.run_until_stalled();

		let err = block_on(router.on_select("weather")).unwrap_err();
		assert_eq!(err, VizError::UnknownDataset("weather".into()));

		router.source().resolve("data/taskIndex.json", json!({"name": "old"}));
		pool.run_until_stalled();

		let renderer = router.panes().renderer();
		assert!(renderer.index_renders().is_empty());
		assert!(matches!(
			renderer.calls.borrow().last(),
			Some(RenderCall::Error(Pane::Index, _))
		));
		assert_eq!(*outcome.borrow(), Some(Ok(SelectOutcome::Stale)));
	}

	#[test]
	fn strict_mode_reports_malformed_documents() {
		let router = SelectionRouter::with_mode(
			DatasetRegistry::default(),
			StaticSource::default().with("data/taskIndex.json", json!({"promoted": "x"})),
			PaneController::new(RecordingRenderer::default(), WorkingPaneState::default()),
			RenderOptions::default(),
			NormalizeMode::Strict,
		);
		let err = block_on(router.on_select("task")).unwrap_err();
		assert!(matches!(err, VizError::MalformedDocument(_)));
		assert!(router.panes().renderer().index_renders().is_empty());
	}
}
