//! Working pane: promoted, attached and unattached nodes of the scratch
//! document, one band per partition.

mod component;
pub mod layout;

pub use component::WorkingPane;
pub use layout::{Band, PlacedLink, PlacedNode, WorkingLayout};
