//! Stock list domain module.
//!
//! Entities, the request-scoped form, and the quantity comparison used by
//! search. Pure domain logic: no IO, no HTTP, no storage.

pub mod form;
pub mod item;
pub mod quantity;

pub use form::StockListForm;
pub use item::{CenterInfo, PartsCategory, StockItem};
pub use quantity::QuantityOp;
