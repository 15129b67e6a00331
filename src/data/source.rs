//! Fetching JSON documents by URL.

use std::future::Future;

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use super::model::RawDocument;
use crate::error::{FetchError, Result};

/// Something that resolves a URL to a parsed document.
///
/// Implementations do not retry; failures go straight back to the caller.
pub trait DataSource {
	fn fetch(&self, url: &str) -> impl Future<Output = Result<RawDocument>>;
}

/// Browser `fetch()` over the page's origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

impl DataSource for HttpSource {
	async fn fetch(&self, url: &str) -> Result<RawDocument> {
		let text = fetch_text(url).await?;
		let value: serde_json::Value =
			serde_json::from_str(&text).map_err(|e| FetchError::Parse {
				url: url.to_string(),
				message: e.to_string(),
			})?;
		let doc = RawDocument::from_value(value)?;
		info!("triage-viz: fetched {} ({} top-level keys)", url, doc.fields().len());
		Ok(doc)
	}
}

async fn fetch_text(url: &str) -> std::result::Result<String, FetchError> {
	let window: Window = web_sys::window().ok_or(FetchError::NoWindow)?;
	let network = |e: JsValue| FetchError::Network {
		url: url.to_string(),
		message: js_message(&e),
	};

	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(network)?
		.dyn_into()
		.map_err(network)?;
	if !response.ok() {
		return Err(FetchError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let body = JsFuture::from(response.text().map_err(network)?)
		.await
		.map_err(network)?;
	body.as_string().ok_or_else(|| FetchError::Parse {
		url: url.to_string(),
		message: "response body is not text".to_string(),
	})
}

fn js_message(value: &JsValue) -> String {
	if let Some(err) = value.dyn_ref::<js_sys::Error>() {
		return String::from(err.message());
	}
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
