use std::sync::Arc;

use stocklist_infra::{CenterInfoService, InMemoryServices, PartsCategoryService, StockListService};

/// Service collaborators available to every handler.
#[derive(Clone)]
pub struct AppServices {
    pub stock_list: Arc<dyn StockListService>,
    pub parts_category: Arc<dyn PartsCategoryService>,
    pub center_info: Arc<dyn CenterInfoService>,
}

impl AppServices {
    pub fn new(
        stock_list: Arc<dyn StockListService>,
        parts_category: Arc<dyn PartsCategoryService>,
        center_info: Arc<dyn CenterInfoService>,
    ) -> Self {
        Self {
            stock_list,
            parts_category,
            center_info,
        }
    }
}

impl From<InMemoryServices> for AppServices {
    fn from(services: InMemoryServices) -> Self {
        Self::new(services.stock_list, services.parts_category, services.center_info)
    }
}
