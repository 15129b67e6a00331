//! Index pane: the selected dataset drawn as a collapsible indented tree.

mod component;
pub mod layout;

pub use component::IndexTree;
pub use layout::{TreeLayout, TreeLink, TreeRow};
