//! Fixed mapping from dataset key to document URL.

use crate::error::{Result, VizError};

/// Dataset shown on first load.
pub const DEFAULT_DATASET: &str = "sighting";

/// Dataset keys in selector order.
pub const STANDARD_DATASETS: [&str; 6] = ["sighting", "task", "impact", "event", "me", "company"];

const SCRATCH_FILE: &str = "scratch.json";

/// One selectable dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetEntry {
	pub key: String,
	pub url: String,
}

/// Ordered, read-only registry of index datasets plus the scratch document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetRegistry {
	entries: Vec<DatasetEntry>,
	scratch_url: String,
}

impl DatasetRegistry {
	/// The standard datasets under `data_root`, e.g. `data/taskIndex.json`.
	pub fn standard(data_root: &str) -> Self {
		let root = data_root.trim_end_matches('/');
		let join = |file: &str| {
			if root.is_empty() {
				file.to_string()
			} else {
				format!("{root}/{file}")
			}
		};
		Self {
			entries: STANDARD_DATASETS
				.iter()
				.map(|key| DatasetEntry {
					key: (*key).to_string(),
					url: join(&format!("{key}Index.json")),
				})
				.collect(),
			scratch_url: join(SCRATCH_FILE),
		}
	}

	/// Build from explicit entries. Later duplicates of a key are ignored.
	pub fn from_entries<I, K, U>(entries: I, scratch_url: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = (K, U)>,
		K: Into<String>,
		U: Into<String>,
	{
		let mut list: Vec<DatasetEntry> = Vec::new();
		for (key, url) in entries {
			let key = key.into();
			if list.iter().all(|e| e.key != key) {
				list.push(DatasetEntry { key, url: url.into() });
			}
		}
		Self {
			entries: list,
			scratch_url: scratch_url.into(),
		}
	}

	/// URL for `key`, or [`VizError::UnknownDataset`].
	pub fn url_for(&self, key: &str) -> Result<&str> {
		self.entries
			.iter()
			.find(|e| e.key == key)
			.map(|e| e.url.as_str())
			.ok_or_else(|| VizError::UnknownDataset(key.to_string()))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|e| e.key.as_str())
	}

	pub fn entries(&self) -> &[DatasetEntry] {
		&self.entries
	}

	pub fn scratch_url(&self) -> &str {
		&self.scratch_url
	}
}

impl Default for DatasetRegistry {
	fn default() -> Self {
		Self::standard("data")
	}
}
