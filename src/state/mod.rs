//! State management module
//! 
//! This module contains the controller phase, countdown values and the
//! controller that ties the feed, countdown and selection store together.

pub mod controller;
pub mod countdown_state;
pub mod phase;
pub mod view;

// Re-export main types
pub use controller::AppController;
pub use countdown_state::{CountdownState, EXPIRED_TEXT};
pub use phase::Phase;
pub use view::{LinkActivation, LinkView, SharePayload, UNAVAILABLE_NOTICE};
