//! Alternative repository backends.
//!
//! PostgreSQL implementations live next to each feature's repository trait;
//! this module holds the in-memory store the test suite runs against.
pub mod in_memory;

pub use in_memory::InMemoryStore;
