//! Service collaborators consumed by the web layer.
//!
//! Each concern is a trait seam (`StockListService`, `PartsCategoryService`,
//! `CenterInfoService`) with an in-memory implementation used by the binary
//! and by black-box tests. Controller tests mock the traits instead.

use std::sync::Arc;

use stocklist_core::{CategoryId, CenterId};
use stocklist_inventory::{CenterInfo, PartsCategory, StockItem, StockListForm};

pub mod center_info;
pub mod demo;
pub mod error;
pub mod parts_category;
pub mod stock_list;

pub use center_info::InMemoryCenterInfoService;
pub use error::{ServiceError, ServiceResult};
pub use parts_category::InMemoryPartsCategoryService;
pub use stock_list::InMemoryStockListService;

/// CRUD, search and duplicate check over stock items.
pub trait StockListService: Send + Sync {
    fn get_all_stock_list_data(&self) -> ServiceResult<Vec<StockItem>>;

    /// Every argument is an optional filter; `None` means "don't filter".
    /// `quantity_op` is the raw operator text as submitted.
    fn search_stock_list(
        &self,
        category_id: Option<i32>,
        part_name: Option<String>,
        quantity_op: Option<String>,
        quantity: Option<i32>,
    ) -> ServiceResult<Vec<StockItem>>;

    fn get_stock_item_data(&self, stock_id: i32) -> ServiceResult<StockItem>;

    /// `Err(ServiceError::Duplicate)` when another item (any id other than
    /// `stock_id`) already uses `part_name`.
    fn stock_duplication_check(&self, part_name: &str, stock_id: Option<i32>) -> ServiceResult<()>;

    fn register_stock_item(&self, form: &StockListForm) -> ServiceResult<StockItem>;

    fn update_stock_item(&self, form: &StockListForm) -> ServiceResult<StockItem>;

    fn delete_stock_item(&self, stock_id: i32) -> ServiceResult<()>;
}

/// Parts category lookup data.
pub trait PartsCategoryService: Send + Sync {
    fn get_category_info_data(&self) -> ServiceResult<Vec<PartsCategory>>;

    fn get_category(&self, category_id: CategoryId) -> ServiceResult<Option<PartsCategory>> {
        Ok(self
            .get_category_info_data()?
            .into_iter()
            .find(|c| c.category_id == category_id))
    }
}

/// Storage center lookup data.
pub trait CenterInfoService: Send + Sync {
    fn get_center_info_data(&self) -> ServiceResult<Vec<CenterInfo>>;

    fn get_center(&self, center_id: CenterId) -> ServiceResult<Option<CenterInfo>> {
        Ok(self
            .get_center_info_data()?
            .into_iter()
            .find(|c| c.center_id == center_id))
    }
}

/// The three in-memory services wired together.
#[derive(Clone)]
pub struct InMemoryServices {
    pub stock_list: Arc<InMemoryStockListService>,
    pub parts_category: Arc<InMemoryPartsCategoryService>,
    pub center_info: Arc<InMemoryCenterInfoService>,
}

impl InMemoryServices {
    pub fn empty() -> Self {
        let parts_category = Arc::new(InMemoryPartsCategoryService::new());
        let center_info = Arc::new(InMemoryCenterInfoService::new());
        let stock_list = Arc::new(InMemoryStockListService::new(
            parts_category.clone(),
            center_info.clone(),
        ));
        Self {
            stock_list,
            parts_category,
            center_info,
        }
    }
}
