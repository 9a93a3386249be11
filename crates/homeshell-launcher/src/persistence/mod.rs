//! Snapshot serialization for launcher state

mod snapshot;

pub use snapshot::Snapshot;
