use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use stocklist_core::{CategoryId, CenterId, StockId};
use stocklist_inventory::{CenterInfo, PartsCategory, QuantityOp, StockItem, StockListForm};

use crate::read_model::{InMemoryStore, KeyedStore};

use super::{CenterInfoService, PartsCategoryService, ServiceError, ServiceResult, StockListService};

/// Stock list service over an in-memory store.
///
/// Ids are assigned sequentially from 1. Category and center ids submitted
/// through a form are resolved through the lookup services.
pub struct InMemoryStockListService {
    items: InMemoryStore<StockId, StockItem>,
    categories: Arc<dyn PartsCategoryService>,
    centers: Arc<dyn CenterInfoService>,
    // Wider than the id so the counter cannot wrap onto an existing item.
    next_id: AtomicI64,
    // Serializes check-then-write so duplicate names cannot slip in between.
    write_lock: Mutex<()>,
}

impl InMemoryStockListService {
    pub fn new(categories: Arc<dyn PartsCategoryService>, centers: Arc<dyn CenterInfoService>) -> Self {
        Self {
            items: InMemoryStore::new(),
            categories,
            centers,
            next_id: AtomicI64::new(1),
            write_lock: Mutex::new(()),
        }
    }

    /// Insert an item with a caller-chosen id (seeding).
    pub fn insert(&self, item: StockItem) {
        self.next_id
            .fetch_max(i64::from(item.stock_id.get()) + 1, Ordering::SeqCst);
        self.items.upsert(item.stock_id, item);
    }

    fn allocate_id(&self) -> ServiceResult<StockId> {
        let raw = self.next_id.fetch_add(1, Ordering::SeqCst);
        let raw = i32::try_from(raw)
            .map_err(|_| ServiceError::Storage("stock id space exhausted".to_string()))?;
        StockId::new(raw).map_err(|e| ServiceError::Storage(e.to_string()))
    }

    fn resolve_category(&self, category_id: i32) -> ServiceResult<PartsCategory> {
        let id = CategoryId::new(category_id)?;
        self.categories
            .get_category(id)?
            .ok_or_else(|| ServiceError::Validation(format!("unknown category: {category_id}")))
    }

    fn resolve_center(&self, center_id: i32) -> ServiceResult<CenterInfo> {
        let id = CenterId::new(center_id)?;
        self.centers
            .get_center(id)?
            .ok_or_else(|| ServiceError::Validation(format!("unknown center: {center_id}")))
    }

    fn find_duplicate(&self, part_name: &str, stock_id: Option<i32>) -> Option<StockItem> {
        let wanted = part_name.trim().to_lowercase();
        self.items.list().into_iter().find(|item| {
            Some(item.stock_id.get()) != stock_id && item.name.trim().to_lowercase() == wanted
        })
    }

    fn lock(&self) -> ServiceResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| ServiceError::Storage("stock write lock poisoned".to_string()))
    }
}

fn required_name(form: &StockListForm) -> ServiceResult<String> {
    form.trimmed_part_name()
        .map(str::to_string)
        .ok_or_else(|| ServiceError::Validation("part name is required".to_string()))
}

impl StockListService for InMemoryStockListService {
    fn get_all_stock_list_data(&self) -> ServiceResult<Vec<StockItem>> {
        Ok(self.items.list())
    }

    fn search_stock_list(
        &self,
        category_id: Option<i32>,
        part_name: Option<String>,
        quantity_op: Option<String>,
        quantity: Option<i32>,
    ) -> ServiceResult<Vec<StockItem>> {
        let name = part_name
            .as_deref()
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty());

        // Quantity without an operator means equality; an unknown operator
        // drops the quantity filter.
        let quantity_filter = match (quantity, quantity_op.as_deref()) {
            (None, _) => None,
            (Some(q), None) => Some((QuantityOp::Eq, q)),
            (Some(q), Some(raw)) => match raw.parse::<QuantityOp>() {
                Ok(op) => Some((op, q)),
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring quantity filter");
                    None
                }
            },
        };

        let hits = self
            .items
            .list()
            .into_iter()
            .filter(|item| category_id.is_none_or(|c| item.category.category_id.get() == c))
            .filter(|item| {
                name.as_deref()
                    .is_none_or(|n| item.name.to_lowercase().contains(n))
            })
            .filter(|item| quantity_filter.is_none_or(|(op, q)| op.matches(item.amount, q)))
            .collect();

        Ok(hits)
    }

    fn get_stock_item_data(&self, stock_id: i32) -> ServiceResult<StockItem> {
        let id = StockId::new(stock_id).map_err(|_| ServiceError::NotFound)?;
        self.items.get(&id).ok_or(ServiceError::NotFound)
    }

    fn stock_duplication_check(&self, part_name: &str, stock_id: Option<i32>) -> ServiceResult<()> {
        match self.find_duplicate(part_name, stock_id) {
            Some(existing) => Err(ServiceError::Duplicate(existing.name)),
            None => Ok(()),
        }
    }

    fn register_stock_item(&self, form: &StockListForm) -> ServiceResult<StockItem> {
        let name = required_name(form)?;
        let category_id = form
            .category_id
            .ok_or_else(|| ServiceError::Validation("category is required".to_string()))?;
        let amount = form
            .quantity
            .ok_or_else(|| ServiceError::Validation("quantity is required".to_string()))?;

        let category = self.resolve_category(category_id)?;
        let center = form.center_id.map(|c| self.resolve_center(c)).transpose()?;

        let _guard = self.lock()?;
        self.stock_duplication_check(&name, None)?;

        let mut item = StockItem::new(self.allocate_id()?, name, category, amount, Utc::now());
        item.center = center;
        item.description = form.description.clone();

        self.items.upsert(item.stock_id, item.clone());
        tracing::info!(stock_id = %item.stock_id, name = %item.name, "stock item registered");
        Ok(item)
    }

    fn update_stock_item(&self, form: &StockListForm) -> ServiceResult<StockItem> {
        let stock_id = form
            .stock_id
            .ok_or_else(|| ServiceError::Validation("stock id is required".to_string()))?;
        let name = required_name(form)?;

        let _guard = self.lock()?;
        let mut item = self.get_stock_item_data(stock_id)?;
        self.stock_duplication_check(&name, Some(stock_id))?;

        item.name = name;
        if let Some(category_id) = form.category_id {
            item.category = self.resolve_category(category_id)?;
        }
        if let Some(center_id) = form.center_id {
            item.center = Some(self.resolve_center(center_id)?);
        }
        if let Some(amount) = form.quantity {
            item.amount = amount;
        }
        if form.description.is_some() {
            item.description = form.description.clone();
        }
        item.updated_at = Utc::now();

        self.items.upsert(item.stock_id, item.clone());
        tracing::info!(stock_id = %item.stock_id, "stock item updated");
        Ok(item)
    }

    fn delete_stock_item(&self, stock_id: i32) -> ServiceResult<()> {
        let id = StockId::new(stock_id).map_err(|_| ServiceError::NotFound)?;
        let _guard = self.lock()?;
        match self.items.remove(&id) {
            Some(_) => {
                tracing::info!(stock_id = %id, "stock item deleted");
                Ok(())
            }
            None => Err(ServiceError::NotFound),
        }
    }
}
