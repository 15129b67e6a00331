//! triage-viz: side-by-side index tree and working pane for triage datasets.
//!
//! The index pane shows one dataset (sightings, tasks, impacts, events,
//! identities, companies) as a collapsible tree and is replaced whenever the
//! user picks another dataset. The working pane is loaded once from the
//! scratch document and shows its promoted, attached and unattached nodes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod panes;

pub use components::context_menu::{ContextMenu, MenuItem, MenuRequest, default_menu_items};
pub use components::index_tree::IndexTree;
pub use components::working_pane::WorkingPane;
pub use config::{RenderOptions, load_render_options};
pub use data::{DEFAULT_DATASET, DataSource, DatasetRegistry, GraphModel, HttpSource, RawDocument};
pub use error::{FetchError, Result, VizError};
pub use panes::{PaneController, PaneRenderer, PaneSignals, PaneView, SelectionRouter};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("triage-viz: logging initialized");
}

/// Main application component.
/// Reads render options from the DOM, then loads the default dataset into the
/// index pane and the scratch document into the working pane.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let options = load_render_options();
	let registry = DatasetRegistry::standard(&options.data_root);
	let theme = options.theme.as_str();
	let keys: Vec<String> = registry.keys().map(str::to_string).collect();

	let signals = PaneSignals::new(options.clone());
	let menu = RwSignal::new(None::<MenuRequest>);
	let router = SelectionRouter::new(
		registry,
		HttpSource,
		PaneController::new(signals, Default::default()),
		options,
	);

	{
		let router = router.clone();
		spawn_local(async move {
			// Failures are already shown on the index pane.
			let _ = router.on_select(DEFAULT_DATASET).await;
		});
	}
	{
		let router = router.clone();
		spawn_local(async move {
			let _ = router.load_scratch().await;
		});
	}

	let selector = keys
		.into_iter()
		.map(|key| {
			let router = router.clone();
			let checked = key == DEFAULT_DATASET;
			let on_change = move |ev: web_sys::Event| {
				let key = event_target_value(&ev);
				let router = router.clone();
				spawn_local(async move {
					let _ = router.on_select(&key).await;
				});
			};
			view! {
				<label class="dataset-option">
					<input
						type="radio"
						name="dataset"
						value=key.clone()
						checked=checked
						on:change=on_change
					/>
					{key}
				</label>
			}
		})
		.collect_view();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=theme />
		<Title text="Triage Visualization" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="triage-viz" on:click=move |_| menu.set(None)>
			<form class="dataset-selector">{selector}</form>
			<div class="panes">
				<IndexTree pane=signals.index options=signals.options menu=menu />
				<WorkingPane pane=signals.working options=signals.options />
			</div>
			<ContextMenu request=menu items=default_menu_items() />
		</div>
	}
}
