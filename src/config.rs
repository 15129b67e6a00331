//! Render options shared by both panes.
//!
//! Every field has a default, so a page can override any subset by embedding
//! a JSON object in `<script id="render-options" type="application/json">`.
//! Key names follow the page-side option object, which mixes `camelCase` and
//! `snake_case`.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::components::theme::{Palette, ThemeName};

/// Id of the optional script element carrying option overrides.
pub const OPTIONS_ELEMENT_ID: &str = "render-options";

/// Pane margins in pixels.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margins {
	pub top: f64,
	pub left: f64,
	pub bottom: f64,
	pub right: f64,
}

impl Default for Margins {
	fn default() -> Self {
		Self {
			top: 100.0,
			left: 30.0,
			bottom: 50.0,
			right: 30.0,
		}
	}
}

/// Pass-through configuration for the pane renderers.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderOptions {
	/// Transition length in milliseconds.
	pub duration: u32,
	/// Corner radius of elbow links.
	pub radius: f64,
	#[serde(rename = "barHeight")]
	pub bar_height: f64,
	pub margin: Margins,
	pub index_width: f64,
	pub working_width: f64,
	pub svg_height: f64,
	pub svg_spacing: f64,

	/// Icon URL prefix.
	pub prefix: String,
	/// Icon shape, prepended to the icon name.
	pub shape: String,
	pub icon_size: f64,
	#[serde(rename = "textPadding")]
	pub text_padding: f64,
	pub corner: f64,

	#[serde(rename = "minHeight")]
	pub min_height: f64,
	pub width: f64,
	pub height: f64,
	#[serde(rename = "lineSpacing")]
	pub line_spacing: f64,
	#[serde(rename = "indentSpacing")]
	pub indent_spacing: f64,
	#[serde(rename = "itemFont")]
	pub item_font: String,
	#[serde(rename = "boxSize")]
	pub box_size: f64,
	pub tree_edge_thickness: f64,
	pub graph_edge_thickness: f64,

	pub theme: ThemeName,
	pub light_theme: Palette,
	pub dark_theme: Palette,

	/// Directory the dataset files are served from.
	pub data_root: String,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			duration: 350,
			radius: 6.0,
			bar_height: 40.0,
			margin: Margins::default(),
			index_width: 400.0,
			working_width: 800.0,
			svg_height: 800.0,
			svg_spacing: 500.0,
			prefix: "https://raw.githubusercontent.com/os-threat/images/main/img/".into(),
			shape: "rect-".into(),
			icon_size: 36.0,
			text_padding: 8.0,
			corner: 5.0,
			min_height: 20.0,
			width: 400.0,
			height: 800.0,
			line_spacing: 50.0,
			indent_spacing: 50.0,
			item_font: "18px".into(),
			box_size: 10.0,
			tree_edge_thickness: 0.75,
			graph_edge_thickness: 1.0,
			theme: ThemeName::Light,
			light_theme: Palette::light(),
			dark_theme: Palette::dark(),
			data_root: "data".into(),
		}
	}
}

impl RenderOptions {
	pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text)
	}

	/// Palette selected by `theme`.
	pub fn palette(&self) -> &Palette {
		match self.theme {
			ThemeName::Light => &self.light_theme,
			ThemeName::Dark => &self.dark_theme,
		}
	}

	/// Icon image URL, `{prefix}{shape}{icon}.svg`.
	pub fn icon_url(&self, icon: &str) -> String {
		format!("{}{}{}.svg", self.prefix, self.shape, icon)
	}
}

/// Read option overrides from the page, falling back to defaults.
pub fn load_render_options() -> RenderOptions {
	let Some(json_text) = options_script_text() else {
		return RenderOptions::default();
	};
	match RenderOptions::from_json_str(&json_text) {
		Ok(options) => {
			info!("triage-viz: loaded render options (theme {:?})", options.theme);
			options
		}
		Err(e) => {
			warn!("triage-viz: failed to parse render options: {}", e);
			RenderOptions::default()
		}
	}
}

fn options_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(OPTIONS_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
