pub mod collection;
pub mod loader;
pub mod record;
pub mod registry;

pub use collection::Collection;
pub use loader::load_snapshot;
pub use record::{Criteria, Record, SortSpec};
pub use registry::{EntityKind, SnapshotSource};
