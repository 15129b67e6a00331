//! Pane synchronization: which document each pane shows, and when.

pub mod controller;
pub mod router;
pub mod view;

pub use controller::{Pane, PaneController, PaneRenderer, WorkingPaneState};
pub use router::{SelectOutcome, SelectionRouter};
pub use view::{PaneSignals, PaneView};
