//! Right-click menu for tree nodes.
//!
//! A row's `contextmenu` handler writes a [`MenuRequest`]; the menu renders
//! while a request is present and clears it after any item runs.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use log::info;
use serde_json::Value;
use web_sys::MouseEvent;

use super::node_label;

/// Where the menu was opened and for which node.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuRequest {
	/// Viewport coordinates of the click.
	pub x: f64,
	pub y: f64,
	/// The clicked node's record.
	pub node: Value,
}

/// Callback run with the clicked node's record.
pub type MenuAction = Arc<dyn Fn(&Value) + Send + Sync>;

/// A titled menu entry.
#[derive(Clone)]
pub struct MenuItem {
	pub title: String,
	pub action: MenuAction,
}

impl MenuItem {
	pub fn new(title: impl Into<String>, action: impl Fn(&Value) + Send + Sync + 'static) -> Self {
		Self {
			title: title.into(),
			action: Arc::new(action),
		}
	}

	pub fn invoke(&self, node: &Value) {
		(self.action)(node);
	}
}

impl fmt::Debug for MenuItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MenuItem").field("title", &self.title).finish_non_exhaustive()
	}
}

/// The stock entries. Both only log the node for now.
pub fn default_menu_items() -> Vec<MenuItem> {
	vec![
		MenuItem::new("Copy Object", |node| {
			info!("triage-viz: copy object {:?}", node_label(node));
		}),
		MenuItem::new("Create Relationship", |node| {
			info!("triage-viz: create relationship from {:?}", node_label(node));
		}),
	]
}

/// Floating menu shown at the position of the last [`MenuRequest`].
#[component]
pub fn ContextMenu(request: RwSignal<Option<MenuRequest>>, items: Vec<MenuItem>) -> impl IntoView {
	let items = StoredValue::new(items);

	move || {
		request.get().map(|req| {
			let entries = items
				.get_value()
				.into_iter()
				.map(|item| {
					let title = item.title.clone();
					let node = req.node.clone();
					let on_click = move |ev: MouseEvent| {
						ev.stop_propagation();
						item.invoke(&node);
						request.set(None);
					};
					view! {
						<li class="context-menu-item" on:click=on_click>
							{title}
						</li>
					}
				})
				.collect_view();
			let style = format!("position: fixed; left: {}px; top: {}px;", req.x, req.y);

			view! {
				<ul class="context-menu" style=style>
					{entries}
				</ul>
			}
		})
	}
}
