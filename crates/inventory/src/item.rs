use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklist_core::{CategoryId, CenterId, StockId};

/// Parts category (lookup data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsCategory {
    pub category_id: CategoryId,
    pub category_name: String,
}

impl PartsCategory {
    pub fn new(category_id: CategoryId, category_name: impl Into<String>) -> Self {
        Self {
            category_id,
            category_name: category_name.into(),
        }
    }
}

/// Storage center (lookup data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterInfo {
    pub center_id: CenterId,
    pub center_name: String,
    pub address: String,
}

impl CenterInfo {
    pub fn new(center_id: CenterId, center_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            center_id,
            center_name: center_name.into(),
            address: address.into(),
        }
    }
}

/// A stock record: one part, its category, where it is kept, and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub stock_id: StockId,
    pub name: String,
    pub category: PartsCategory,
    pub center: Option<CenterInfo>,
    pub amount: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StockItem {
    pub fn new(
        stock_id: StockId,
        name: impl Into<String>,
        category: PartsCategory,
        amount: i32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            stock_id,
            name: name.into(),
            category,
            center: None,
            amount,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_center(mut self, center: CenterInfo) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let category = PartsCategory::new(CategoryId::new(2).unwrap(), "Rotor");
        let item = StockItem::new(StockId::new(5).unwrap(), "Propeller", category, 12, Utc::now());

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["stockId"], 5);
        assert_eq!(json["category"]["categoryName"], "Rotor");
        assert_eq!(json["amount"], 12);
        assert!(json["center"].is_null());
    }
}
