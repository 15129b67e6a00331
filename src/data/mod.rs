//! Dataset loading: URL registry, fetching, and normalization into
//! [`GraphModel`] snapshots.

pub mod identity;
pub mod model;
pub mod registry;
pub mod source;

pub use identity::{LinkEnds, link_identity, node_identity, node_identity_of};
pub use model::{GraphModel, NormalizeMode, Partition, RawDocument, normalize, normalize_strict};
pub use registry::{DEFAULT_DATASET, DatasetRegistry};
pub use source::{DataSource, HttpSource};
