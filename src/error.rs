//! Error types for dataset loading and pane updates.
//!
//! Nothing here is fatal: every error is logged and shown in the pane it
//! affects, leaving the other pane alone.

use thiserror::Error;

/// Failure to retrieve or parse a JSON document.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
	#[error("no browser window available")]
	NoWindow,

	#[error("request to {url} failed: {message}")]
	Network { url: String, message: String },

	#[error("request to {url} returned status {status}")]
	Status { url: String, status: u16 },

	#[error("response from {url} is not valid JSON: {message}")]
	Parse { url: String, message: String },
}

/// Top-level error type for triage-viz.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VizError {
	#[error(transparent)]
	Fetch(#[from] FetchError),

	#[error("unknown dataset key: {0:?}")]
	UnknownDataset(String),

	#[error("malformed document: {0}")]
	MalformedDocument(String),

	#[error("working pane is already initialized")]
	WorkingPaneAlreadyInitialized,
}

impl VizError {
	/// Create a malformed-document error with context.
	pub fn malformed(context: impl Into<String>) -> Self {
		Self::MalformedDocument(context.into())
	}
}

/// Result type alias for triage-viz.
pub type Result<T> = std::result::Result<T, VizError>;
