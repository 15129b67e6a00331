//! Raw documents and the partitioned graph model derived from them.
//!
//! A [`GraphModel`] is rebuilt from scratch on every load and never mutated
//! afterwards. The three partitions keep the order they had in the source
//! document.

use serde_json::{Map, Value};

use crate::error::{Result, VizError};

/// A parsed JSON document. Always a JSON object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawDocument(Map<String, Value>);

impl RawDocument {
	pub fn new(fields: Map<String, Value>) -> Self {
		Self(fields)
	}

	/// Wrap a JSON value, rejecting anything that is not an object.
	pub fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Object(fields) => Ok(Self(fields)),
			other => Err(VizError::malformed(format!(
				"expected a JSON object, found {}",
				json_kind(&other)
			))),
		}
	}

	pub fn from_json_str(text: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(text)
			.map_err(|e| VizError::malformed(format!("invalid JSON: {e}")))?;
		Self::from_value(value)
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	pub fn fields(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Copy out as a plain JSON value.
	pub fn to_value(&self) -> Value {
		Value::Object(self.0.clone())
	}
}

impl TryFrom<Value> for RawDocument {
	type Error = VizError;

	fn try_from(value: Value) -> Result<Self> {
		Self::from_value(value)
	}
}

/// One of the three named node partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Partition {
	Promoted,
	Attached,
	Unattached,
}

impl Partition {
	/// All partitions, in rendering order.
	pub const ALL: [Partition; 3] = [Self::Promoted, Self::Attached, Self::Unattached];

	/// Top-level document key holding this partition.
	pub fn key(self) -> &'static str {
		match self {
			Self::Promoted => "promoted",
			Self::Attached => "attached",
			Self::Unattached => "unattached",
		}
	}
}

/// How to treat a partition key whose value is not an array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalizeMode {
	/// Treat it as an empty partition.
	#[default]
	Lenient,
	/// Fail with [`VizError::MalformedDocument`].
	Strict,
}

/// Immutable, partitioned snapshot of a loaded document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
	promoted: Vec<Value>,
	attached: Vec<Value>,
	unattached: Vec<Value>,
	raw: RawDocument,
}

impl GraphModel {
	pub fn promoted(&self) -> &[Value] {
		&self.promoted
	}

	pub fn attached(&self) -> &[Value] {
		&self.attached
	}

	pub fn unattached(&self) -> &[Value] {
		&self.unattached
	}

	pub fn raw(&self) -> &RawDocument {
		&self.raw
	}

	pub fn partition(&self, partition: Partition) -> &[Value] {
		match partition {
			Partition::Promoted => &self.promoted,
			Partition::Attached => &self.attached,
			Partition::Unattached => &self.unattached,
		}
	}

	/// Total node count over all partitions.
	pub fn node_count(&self) -> usize {
		self.promoted.len() + self.attached.len() + self.unattached.len()
	}
}

/// Normalize a document, treating missing or non-array partitions as empty.
pub fn normalize(doc: RawDocument) -> GraphModel {
	let take = |partition: Partition| match doc.get(partition.key()) {
		Some(Value::Array(items)) => items.clone(),
		_ => Vec::new(),
	};
	GraphModel {
		promoted: take(Partition::Promoted),
		attached: take(Partition::Attached),
		unattached: take(Partition::Unattached),
		raw: doc,
	}
}

/// Normalize a document, failing if a partition key holds a non-array value.
///
/// Absent keys still produce empty partitions.
pub fn normalize_strict(doc: RawDocument) -> Result<GraphModel> {
	for partition in Partition::ALL {
		match doc.get(partition.key()) {
			None | Some(Value::Array(_)) => {}
			Some(other) => {
				return Err(VizError::malformed(format!(
					"`{}` must be an array, found {}",
					partition.key(),
					json_kind(other)
				)));
			}
		}
	}
	Ok(normalize(doc))
}

/// Normalize with the given mode.
pub fn normalize_with(doc: RawDocument, mode: NormalizeMode) -> Result<GraphModel> {
	match mode {
		NormalizeMode::Lenient => Ok(normalize(doc)),
		NormalizeMode::Strict => normalize_strict(doc),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
