//! Result Watch - countdown and result-link tracker for exam result releases
//! 
//! This library fetches a small feed describing the result release time and
//! the result portals, counts down to the release, and remembers which portal
//! the user opened last.

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod feed;
pub mod state;
pub mod store;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use clock::{AnchoredClock, ClockSource, SystemClock};
pub use config::Config;
pub use error::{ActivationError, FeedError, StoreError};
pub use feed::{HttpFeedClient, LinkFeed, ResultFeed, ResultLink, TargetInstant};
pub use state::{AppController, CountdownState, Phase};
pub use store::{FileSelectionStore, MemorySelectionStore, SelectionStore};
pub use tasks::{CountdownEngine, CountdownHandle};
pub use utils::signals::shutdown_signal;
