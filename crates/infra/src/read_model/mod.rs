//! Keyed record storage abstractions.

pub mod store;

pub use store::{InMemoryStore, KeyedStore};
