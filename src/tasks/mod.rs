//! Background tasks module
//! 
//! This module contains the periodic countdown that runs alongside the HTTP server.

pub mod countdown;

// Re-export main types
pub use countdown::{CountdownEngine, CountdownHandle};
