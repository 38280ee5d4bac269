//! `stocklist-core`: domain building blocks shared by the stock list crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, CenterId, StockId};
