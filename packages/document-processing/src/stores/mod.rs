//! In-memory storage for sessions and learned patterns.
//!
//! Nothing here outlives the process.

pub mod memory;

pub use memory::{MemoryBank, SessionStore};
