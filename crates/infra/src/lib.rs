//! Infrastructure layer: storage and the service collaborators the web layer
//! depends on.

pub mod read_model;
pub mod services;

pub use services::{
    CenterInfoService, InMemoryCenterInfoService, InMemoryPartsCategoryService,
    InMemoryServices, InMemoryStockListService, PartsCategoryService, ServiceError,
    ServiceResult, StockListService,
};
