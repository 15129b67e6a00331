//! Leptos component drawing the index pane as an SVG indented tree.
//!
//! The whole tree is rebuilt from [`TreeLayout`] whenever the pane value,
//! the options or the collapse set change, and the SVG grows to fit it.
//! Collapse state is dropped when a new document arrives.

use std::collections::HashSet;

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::layout::{TreeLayout, TreeRow, toggle_collapsed};
use crate::components::context_menu::MenuRequest;
use crate::components::theme::Palette;
use crate::config::RenderOptions;
use crate::panes::PaneView;

/// Index pane. Right-clicking a row opens the context menu for that node;
/// clicking a toggle box collapses or expands its subtree.
#[component]
pub fn IndexTree(
	pane: RwSignal<PaneView>,
	options: RwSignal<RenderOptions>,
	menu: RwSignal<Option<MenuRequest>>,
) -> impl IntoView {
	let collapsed = RwSignal::new(HashSet::<String>::new());
	Effect::new(move |_| {
		pane.track();
		collapsed.set(HashSet::new());
	});

	let layout = Memo::new(move |_| match pane.get() {
		PaneView::Ready(model) => options.with(|o| {
			collapsed.with(|c| Some(TreeLayout::new(&model.raw().to_value(), c, o)))
		}),
		_ => None,
	});

	let content = move || {
		let opts = options.get();
		match (pane.get(), layout.get()) {
			(PaneView::Failed(message), _) => view! {
				<text class="pane-error" x="0" y="0" fill="red">{message}</text>
			}
			.into_any(),
			(PaneView::Ready(_), Some(layout)) => {
				tree_view(layout, &opts, collapsed, menu).into_any()
			}
			_ => view! {
				<text class="pane-status" x="0" y="0">"Loading…"</text>
			}
			.into_any(),
		}
	};

	let width = move || options.with(|o| o.width.to_string());
	let height = move || {
		options.with(|o| {
			layout.with(|l| l.as_ref().map_or(o.height, |l| l.svg_height(o)).to_string())
		})
	};
	let background = move || options.with(|o| o.palette().tree_fill.clone());
	let border = move || options.with(|o| o.palette().svg_border.clone());
	let offset = move || options.with(|o| format!("translate({},{})", o.margin.left, o.margin.top));

	view! {
		<div class="index-pane">
			<svg class="index_svg" width=width height=height>
				<rect
					class="pane-background"
					width="100%"
					height="100%"
					fill=background
					stroke=border
				/>
				<g transform=offset>{content}</g>
			</svg>
		</div>
	}
}

fn tree_view(
	layout: TreeLayout,
	options: &RenderOptions,
	collapsed: RwSignal<HashSet<String>>,
	menu: RwSignal<Option<MenuRequest>>,
) -> impl IntoView + use<> {
	let palette = options.palette().clone();
	let links = layout
		.links
		.into_iter()
		.map(|link| {
			view! {
				<path
					class="tree-link"
					data-key=link.key
					d=link.d
					fill="none"
					stroke=palette.edges.clone()
					stroke-width=options.tree_edge_thickness.to_string()
				/>
			}
		})
		.collect_view();
	let rows = layout
		.rows
		.into_iter()
		.map(|row| tree_row(row, options, &palette, collapsed, menu))
		.collect_view();

	view! {
		<g class="tree-links">{links}</g>
		<g class="tree-rows">{rows}</g>
	}
}

fn tree_row(
	row: TreeRow,
	options: &RenderOptions,
	palette: &Palette,
	collapsed: RwSignal<HashSet<String>>,
	menu: RwSignal<Option<MenuRequest>>,
) -> impl IntoView + use<> {
	let half_box = options.box_size / 2.0;
	let toggle = row.has_children.then(|| {
		let path = row.path.clone();
		let glyph = if row.collapsed { "+" } else { "−" };
		view! {
			<g
				class="tree-toggle"
				on:click=move |ev: MouseEvent| {
					ev.stop_propagation();
					collapsed.update(|c| toggle_collapsed(c, &path));
				}
			>
				<rect
					x=(-half_box).to_string()
					y=(-half_box).to_string()
					width=options.box_size.to_string()
					height=options.box_size.to_string()
					fill=palette.check_colour.clone()
				/>
				<text
					x="0"
					y=(half_box * 0.8).to_string()
					text-anchor="middle"
					font-size=options.box_size.to_string()
					fill=palette.check_text.clone()
				>
					{glyph}
				</text>
			</g>
		}
	});

	let icon_x = options.box_size;
	let icon = row.icon_url.clone().map(|href| {
		view! {
			<image
				href=href
				x=icon_x.to_string()
				y=(-options.icon_size / 2.0).to_string()
				width=options.icon_size.to_string()
				height=options.icon_size.to_string()
			/>
		}
	});
	let label_x = if row.icon_url.is_some() {
		icon_x + options.icon_size + options.text_padding
	} else {
		icon_x + options.text_padding
	};

	let record = row.record;
	let on_context = move |ev: MouseEvent| {
		ev.prevent_default();
		menu.set(Some(MenuRequest {
			x: ev.client_x() as f64,
			y: ev.client_y() as f64,
			node: record.clone(),
		}));
	};

	view! {
		<g
			class="tree-row"
			data-key=row.key
			data-edge=row.edge.unwrap_or_default()
			transform=format!("translate({},{})", row.x, row.y)
			on:contextmenu=on_context
		>
			{toggle}
			{icon}
			<text
				class="tree-label"
				x=label_x.to_string()
				dy="0.35em"
				font-size=options.item_font.clone()
				fill=palette.svg_name.clone()
			>
				{row.label}
			</text>
		</g>
	}
}
