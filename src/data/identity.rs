//! Key functions for rendered nodes and links.
//!
//! Keys are only meaningful within one render pass. They are derived from
//! positions, so a reload that reorders nodes changes them.

use serde_json::Value;

/// Node field holding the group identifier.
pub const GROUP_ID_KEY: &str = "G_id";

/// Positional ends of a link within the rendered node sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LinkEnds {
	pub source: usize,
	pub target: usize,
}

/// `"{group_id}-{index}"`. The index never contains `-`, so the last dash
/// separates the pair and distinct pairs never collide.
pub fn node_identity(group_id: &str, index: usize) -> String {
	format!("{group_id}-{index}")
}

/// Node identity read from a node record's `G_id` field.
pub fn node_identity_of(node: &Value, index: usize) -> String {
	node_identity(&group_id(node), index)
}

/// `"{source}-{target}"` over rendered positions.
pub fn link_identity(link: &LinkEnds) -> String {
	format!("{}-{}", link.source, link.target)
}

/// The node's group identifier as text. Strings are used verbatim, numbers
/// and booleans by their JSON text; anything else is empty.
pub fn group_id(node: &Value) -> String {
	match node.get(GROUP_ID_KEY) {
		Some(Value::String(s)) => s.clone(),
		Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
		_ => String::new(),
	}
}
