pub mod snapshot;

pub use snapshot::{JsonDirStore, MemoryStore, SnapshotStore, StoreError};
