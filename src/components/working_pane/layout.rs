//! Banded grid layout for the working pane.
//!
//! The drawable area is split into three equal horizontal bands, one per
//! partition, in [`Partition::ALL`] order. Nodes fill each band row by row.
//! The rendered node sequence is promoted, then attached, then unattached;
//! node and link keys are positions in that sequence and are recomputed on
//! every layout.

use std::collections::HashMap;

use serde_json::Value;

use crate::components::{node_icon, node_label};
use crate::config::RenderOptions;
use crate::data::identity::{GROUP_ID_KEY, LinkEnds, link_identity, node_identity_of};
use crate::data::{GraphModel, Partition};

/// Top-level document keys that may hold the link list.
pub const LINK_KEYS: [&str; 2] = ["edges", "links"];

/// Horizontal distance between node centers, in icon sizes.
const COLUMN_STEP: f64 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Band {
	pub partition: Partition,
	pub y: f64,
	pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedNode {
	pub key: String,
	pub partition: Partition,
	pub x: f64,
	pub y: f64,
	pub label: String,
	pub icon_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLink {
	pub key: String,
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkingLayout {
	pub bands: Vec<Band>,
	pub nodes: Vec<PlacedNode>,
	pub links: Vec<PlacedLink>,
}

impl WorkingLayout {
	pub fn new(model: &GraphModel, options: &RenderOptions) -> Self {
		let inner_width =
			(options.working_width - options.margin.left - options.margin.right).max(0.0);
		let inner_height = (options.height - options.margin.top - options.margin.bottom).max(0.0);
		let band_height = inner_height / Partition::ALL.len() as f64;
		let step = (options.icon_size * COLUMN_STEP).max(1.0);
		let columns = ((inner_width / step).floor() as usize).max(1);

		let mut layout = Self::default();
		let mut id_to_index: HashMap<String, usize> = HashMap::new();

		for (band_index, partition) in Partition::ALL.into_iter().enumerate() {
			let band_y = band_index as f64 * band_height;
			layout.bands.push(Band {
				partition,
				y: band_y,
				height: band_height,
			});

			for (i, node) in model.partition(partition).iter().enumerate() {
				let index = layout.nodes.len();
				if let Some(id) = link_id(node) {
					id_to_index.entry(id).or_insert(index);
				}
				let (col, row) = (i % columns, i / columns);
				layout.nodes.push(PlacedNode {
					key: node_identity_of(node, index),
					partition,
					x: step / 2.0 + col as f64 * step,
					y: band_y + options.line_spacing / 2.0 + row as f64 * options.line_spacing,
					label: node_label(node),
					icon_url: node_icon(node).map(|icon| options.icon_url(icon)),
				});
			}
		}

		let raw_links = LINK_KEYS
			.iter()
			.find_map(|key| model.raw().get(key).and_then(Value::as_array));
		for link in raw_links.into_iter().flatten() {
			let end = |field: &str| {
				link.get(field)
					.and_then(Value::as_str)
					.and_then(|id| id_to_index.get(id).copied())
			};
			if let (Some(source), Some(target)) = (end("source"), end("target")) {
				let (from, to) = (&layout.nodes[source], &layout.nodes[target]);
				layout.links.push(PlacedLink {
					key: link_identity(&LinkEnds { source, target }),
					x1: from.x,
					y1: from.y,
					x2: to.x,
					y2: to.y,
				});
			}
		}
		layout
	}
}

/// Id that links refer to: `id`, falling back to `G_id`.
fn link_id(node: &Value) -> Option<String> {
	["id", GROUP_ID_KEY]
		.iter()
		.find_map(|key| node.get(*key).and_then(Value::as_str))
		.map(str::to_string)
}
