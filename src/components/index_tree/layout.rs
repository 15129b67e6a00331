//! Indented tree layout.
//!
//! Rows are emitted depth-first in document order. Row `i` sits at
//! `y = i * line_spacing`, and each tree level is indented by
//! `indent_spacing`. Children of collapsed rows are skipped entirely, so the
//! rows below move up to fill the gap.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::components::{node_icon, node_label};
use crate::config::RenderOptions;
use crate::data::identity::{GROUP_ID_KEY, LinkEnds, link_identity, node_identity};

/// Field holding a node's child list.
pub const CHILDREN_KEY: &str = "children";

/// One visible row of the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeRow {
	/// Node identity for this render pass.
	pub key: String,
	/// Child-index path from the root, e.g. `"0/2/1"`. Stable while the
	/// document is unchanged, so it keys collapse state.
	pub path: String,
	pub depth: usize,
	pub x: f64,
	pub y: f64,
	pub label: String,
	/// Relationship to the parent, from the node's `edge` field.
	pub edge: Option<String>,
	pub icon_url: Option<String>,
	pub has_children: bool,
	pub collapsed: bool,
	/// Row index of the parent row.
	pub parent: Option<usize>,
	/// The node's own fields, without its children.
	pub record: Value,
}

/// Elbow link from a parent row down to a child row.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeLink {
	pub key: String,
	/// SVG path data.
	pub d: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeLayout {
	pub rows: Vec<TreeRow>,
	pub links: Vec<TreeLink>,
	/// Height of all rows, never below `min_height`.
	pub height: f64,
}

impl TreeLayout {
	/// Lay out `root`. An empty object produces no rows.
	pub fn new(root: &Value, collapsed: &HashSet<String>, options: &RenderOptions) -> Self {
		let mut layout = Self::default();
		if root.as_object().is_some_and(|o| !o.is_empty()) {
			// (node, path, depth, parent row)
			let mut stack: Vec<(&Value, String, usize, Option<usize>)> =
				vec![(root, "0".to_string(), 0, None)];
			while let Some((node, path, depth, parent)) = stack.pop() {
				let children = children_of(node);
				let is_collapsed = collapsed.contains(&path);
				let row_index = layout.rows.len();
				layout.rows.push(make_row(
					node,
					&path,
					depth,
					parent,
					row_index,
					options,
					!children.is_empty(),
					is_collapsed,
				));

				if !is_collapsed {
					for (i, child) in children.iter().enumerate().rev() {
						stack.push((child, format!("{path}/{i}"), depth + 1, Some(row_index)));
					}
				}
			}
		}

		layout.links = layout
			.rows
			.iter()
			.enumerate()
			.filter_map(|(i, row)| {
				let parent = &layout.rows[row.parent?];
				Some(TreeLink {
					key: link_identity(&LinkEnds {
						source: row.parent?,
						target: i,
					}),
					d: elbow_path(parent, row, options.radius),
				})
			})
			.collect();
		layout.height = (layout.rows.len() as f64 * options.line_spacing).max(options.min_height);
		layout
	}

	/// Pane height: at least `options.height`, taller when the rows and
	/// margins need more room.
	pub fn svg_height(&self, options: &RenderOptions) -> f64 {
		(self.height + options.margin.top + options.margin.bottom).max(options.height)
	}
}

/// Toggle collapse state of the row at `path`.
pub fn toggle_collapsed(collapsed: &mut HashSet<String>, path: &str) {
	if !collapsed.remove(path) {
		collapsed.insert(path.to_string());
	}
}

fn children_of(node: &Value) -> &[Value] {
	match node.get(CHILDREN_KEY) {
		Some(Value::Array(items)) => items.as_slice(),
		_ => &[],
	}
}

#[allow(clippy::too_many_arguments)]
fn make_row(
	node: &Value,
	path: &str,
	depth: usize,
	parent: Option<usize>,
	row_index: usize,
	options: &RenderOptions,
	has_children: bool,
	collapsed: bool,
) -> TreeRow {
	let record = match node {
		Value::Object(fields) => Value::Object(
			fields
				.iter()
				.filter(|(k, _)| k.as_str() != CHILDREN_KEY)
				.map(|(k, v)| (k.clone(), v.clone()))
				.collect::<Map<_, _>>(),
		),
		other => other.clone(),
	};
	TreeRow {
		key: node_identity(&row_group(node), row_index),
		path: path.to_string(),
		depth,
		x: depth as f64 * options.indent_spacing,
		y: row_index as f64 * options.line_spacing,
		label: node_label(node),
		edge: node
			.get("edge")
			.and_then(Value::as_str)
			.filter(|e| !e.is_empty())
			.map(str::to_string),
		icon_url: node_icon(node).map(|icon| options.icon_url(icon)),
		has_children,
		collapsed,
		parent,
		record,
	}
}

/// Group part of a row key: `G_id`, falling back to the node's `id`.
fn row_group(node: &Value) -> String {
	[GROUP_ID_KEY, "id"]
		.iter()
		.find_map(|key| node.get(*key).and_then(Value::as_str))
		.unwrap_or_default()
		.to_string()
}

/// Down from the parent, around a corner of `radius`, across to the child.
fn elbow_path(parent: &TreeRow, child: &TreeRow, radius: f64) -> String {
	let r = radius
		.min(child.x - parent.x)
		.min(child.y - parent.y)
		.max(0.0);
	format!(
		"M{},{} V{} Q{},{} {},{} H{}",
		parent.x,
		parent.y,
		child.y - r,
		parent.x,
		child.y,
		parent.x + r,
		child.y,
		child.x
	)
}
