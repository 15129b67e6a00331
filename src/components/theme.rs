//! Pane color palettes.
//!
//! Colors are CSS color strings handed straight to SVG `fill`/`stroke`
//! attributes.

use serde::Deserialize;

/// Which palette to draw with.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
	#[default]
	Light,
	Dark,
}

impl ThemeName {
	/// Value for the page's `data-theme` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

/// A named set of pane colors.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
	/// Index pane background
	pub tree_fill: String,
	/// Working pane background
	pub scratch_fill: String,
	/// Promoted band background
	pub promo_fill: String,
	/// Pane title text
	pub svg_name: String,
	/// Pane border
	pub svg_border: String,
	/// Toggle box fill
	pub check_colour: String,
	/// Toggle box glyph
	pub check_text: String,
	/// Selected row highlight
	pub select: String,
	/// Link stroke
	pub edges: String,
}

impl Palette {
	/// Light palette (default)
	pub fn light() -> Self {
		Self {
			tree_fill: "white".into(),
			scratch_fill: "ivory".into(),
			promo_fill: "blanchedalmond".into(),
			svg_name: "black".into(),
			svg_border: "black".into(),
			check_colour: "gray".into(),
			check_text: "white".into(),
			select: "yellow".into(),
			edges: "black".into(),
		}
	}

	/// Dark palette
	pub fn dark() -> Self {
		Self {
			tree_fill: "gray".into(),
			scratch_fill: "dimgray".into(),
			promo_fill: "gray".into(),
			svg_name: "white".into(),
			svg_border: "white".into(),
			check_colour: "white".into(),
			check_text: "gray".into(),
			select: "yellow".into(),
			edges: "white".into(),
		}
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::light()
	}
}
