use stocklist_core::CategoryId;
use stocklist_inventory::PartsCategory;

use crate::read_model::{InMemoryStore, KeyedStore};

use super::{PartsCategoryService, ServiceResult};

#[derive(Debug, Default)]
pub struct InMemoryPartsCategoryService {
    store: InMemoryStore<CategoryId, PartsCategory>,
}

impl InMemoryPartsCategoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, category: PartsCategory) {
        self.store.upsert(category.category_id, category);
    }
}

impl PartsCategoryService for InMemoryPartsCategoryService {
    fn get_category_info_data(&self) -> ServiceResult<Vec<PartsCategory>> {
        Ok(self.store.list())
    }

    fn get_category(&self, category_id: CategoryId) -> ServiceResult<Option<PartsCategory>> {
        Ok(self.store.get(&category_id))
    }
}
