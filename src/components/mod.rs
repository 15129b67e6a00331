//! Leptos components for the two panes and the shared node helpers.

pub mod context_menu;
pub mod index_tree;
pub mod theme;
pub mod working_pane;

use serde_json::Value;

/// Display text for a node record: `name`, then `heading`, then `id`, then `G_id`.
pub fn node_label(node: &Value) -> String {
	["name", "heading", "id", "G_id"]
		.iter()
		.find_map(|key| match node.get(*key) {
			Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
			Some(v @ Value::Number(_)) => Some(v.to_string()),
			_ => None,
		})
		.unwrap_or_default()
}

/// Icon name of a node record, if it has a non-empty `icon`.
pub(crate) fn node_icon(node: &Value) -> Option<&str> {
	node.get("icon")
		.and_then(Value::as_str)
		.filter(|icon| !icon.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn label_falls_back_through_fields() {
		assert_eq!(node_label(&json!({"name": "Evidence List", "id": "x"})), "Evidence List");
		assert_eq!(node_label(&json!({"name": "", "heading": "Tasks"})), "Tasks");
		assert_eq!(node_label(&json!({"id": "sighting--1"})), "sighting--1");
		assert_eq!(node_label(&json!({"G_id": 4})), "4");
		assert_eq!(node_label(&json!({})), "");
	}

	#[test]
	fn empty_icon_is_none() {
		assert_eq!(node_icon(&json!({"icon": "task"})), Some("task"));
		assert_eq!(node_icon(&json!({"icon": ""})), None);
		assert_eq!(node_icon(&json!({})), None);
	}
}
