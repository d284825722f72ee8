// Utils compartidos

pub mod constants;
pub mod json;
pub mod storage;

pub use constants::*;
pub use storage::{KeyValueStore, MemoryStore, PersistedValue};
