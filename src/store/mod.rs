//! Durable local state module
//!
//! Persists the last used result link across restarts.

pub mod selection;

// Re-export main types
pub use selection::{FileSelectionStore, MemorySelectionStore, SelectionStore, LAST_USED_KEY};
