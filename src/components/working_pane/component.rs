//! Leptos component drawing the working pane as three SVG bands.
//!
//! Bands, links and nodes are redrawn from [`WorkingLayout`] on every pane
//! or options change.

use leptos::prelude::*;

use super::layout::{PlacedNode, WorkingLayout};
use crate::components::theme::Palette;
use crate::config::RenderOptions;
use crate::data::Partition;
use crate::panes::PaneView;

/// Working pane: promoted, attached and unattached nodes in stacked bands.
#[component]
pub fn WorkingPane(pane: RwSignal<PaneView>, options: RwSignal<RenderOptions>) -> impl IntoView {
	let content = move || {
		let opts = options.get();
		match pane.get() {
			PaneView::Loading => view! {
				<text class="pane-status" x="0" y="0">"Loading…"</text>
			}
			.into_any(),
			PaneView::Failed(message) => view! {
				<text class="pane-error" x="0" y="0" fill="red">{message}</text>
			}
			.into_any(),
			PaneView::Ready(model) => {
				working_view(WorkingLayout::new(&model, &opts), &opts).into_any()
			}
		}
	};

	let (width, height) = (
		move || options.with(|o| o.working_width.to_string()),
		move || options.with(|o| o.height.to_string()),
	);
	let border = move || options.with(|o| o.palette().svg_border.clone());
	let offset = move || options.with(|o| format!("translate({},{})", o.margin.left, o.margin.top));

	view! {
		<div class="working-pane">
			<svg class="working_svg" width=width height=height>
				<rect
					class="pane-background"
					width="100%"
					height="100%"
					fill="none"
					stroke=border
				/>
				<g transform=offset>{content}</g>
			</svg>
		</div>
	}
}

fn band_fill(palette: &Palette, partition: Partition) -> String {
	match partition {
		Partition::Promoted => palette.promo_fill.clone(),
		Partition::Attached | Partition::Unattached => palette.scratch_fill.clone(),
	}
}

fn working_view(layout: WorkingLayout, options: &RenderOptions) -> impl IntoView + use<> {
	let palette = options.palette().clone();
	let band_width = (options.working_width - options.margin.left - options.margin.right).max(0.0);

	let bands = layout
		.bands
		.into_iter()
		.map(|band| {
			view! {
				<rect
					class="working-band"
					data-partition=band.partition.key()
					x="0"
					y=band.y.to_string()
					width=band_width.to_string()
					height=band.height.to_string()
					fill=band_fill(&palette, band.partition)
					rx=options.corner.to_string()
				/>
			}
		})
		.collect_view();
	let links = layout
		.links
		.into_iter()
		.map(|link| {
			view! {
				<line
					class="working-link"
					data-key=link.key
					x1=link.x1.to_string()
					y1=link.y1.to_string()
					x2=link.x2.to_string()
					y2=link.y2.to_string()
					stroke=palette.edges.clone()
					stroke-width=options.graph_edge_thickness.to_string()
				/>
			}
		})
		.collect_view();
	let nodes = layout
		.nodes
		.into_iter()
		.map(|node| working_node(node, options, &palette))
		.collect_view();

	view! {
		<g class="working-bands">{bands}</g>
		<g class="working-links">{links}</g>
		<g class="working-nodes">{nodes}</g>
	}
}

fn working_node(
	node: PlacedNode,
	options: &RenderOptions,
	palette: &Palette,
) -> impl IntoView + use<> {
	let half = options.icon_size / 2.0;
	let icon = node.icon_url.map(|href| {
		view! {
			<image
				href=href
				x=(-half).to_string()
				y=(-half).to_string()
				width=options.icon_size.to_string()
				height=options.icon_size.to_string()
			/>
		}
	});

	view! {
		<g
			class="working-node"
			data-key=node.key
			transform=format!("translate({},{})", node.x, node.y)
		>
			{icon}
			<text
				class="working-label"
				y=(half + options.text_padding).to_string()
				dy="0.7em"
				text-anchor="middle"
				font-size=options.item_font.clone()
				fill=palette.svg_name.clone()
			>
				{node.label}
			</text>
		</g>
	}
}
