use stocklist_core::CenterId;
use stocklist_inventory::CenterInfo;

use crate::read_model::{InMemoryStore, KeyedStore};

use super::{CenterInfoService, ServiceResult};

#[derive(Debug, Default)]
pub struct InMemoryCenterInfoService {
    store: InMemoryStore<CenterId, CenterInfo>,
}

impl InMemoryCenterInfoService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, center: CenterInfo) {
        self.store.upsert(center.center_id, center);
    }
}

impl CenterInfoService for InMemoryCenterInfoService {
    fn get_center_info_data(&self) -> ServiceResult<Vec<CenterInfo>> {
        Ok(self.store.list())
    }

    fn get_center(&self, center_id: CenterId) -> ServiceResult<Option<CenterInfo>> {
        Ok(self.store.get(&center_id))
    }
}
