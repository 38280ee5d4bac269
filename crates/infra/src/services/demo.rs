//! Demo lookup data and stock for local runs.

use chrono::Utc;

use stocklist_core::{CategoryId, CenterId, DomainResult, StockId};
use stocklist_inventory::{CenterInfo, PartsCategory, StockItem};

use super::InMemoryServices;

const CATEGORIES: [(i32, &str); 5] = [
    (1, "Frame"),
    (2, "Motor"),
    (3, "Propeller"),
    (4, "Battery"),
    (5, "Sensor"),
];

const CENTERS: [(i32, &str, &str); 3] = [
    (1, "Tokyo Center", "1-1 Marunouchi, Chiyoda-ku, Tokyo"),
    (2, "Osaka Center", "2-2 Umeda, Kita-ku, Osaka"),
    (3, "Fukuoka Center", "3-3 Hakata-eki, Hakata-ku, Fukuoka"),
];

// (stock id, name, category id, center id, amount)
const ITEMS: [(i32, &str, i32, i32, i32); 6] = [
    (1, "Carbon Frame X4", 1, 1, 12),
    (2, "Brushless 2205", 2, 1, 48),
    (3, "Brushless 2306", 2, 2, 20),
    (4, "Prop 5045", 3, 2, 300),
    (5, "LiPo 4S 1500", 4, 3, 35),
    (6, "Optical Flow", 5, 3, 0),
];

impl InMemoryServices {
    /// Services pre-populated with demo categories, centers and stock.
    pub fn with_demo_data() -> DomainResult<Self> {
        let services = Self::empty();
        let now = Utc::now();

        for (id, name) in CATEGORIES {
            services
                .parts_category
                .insert(PartsCategory::new(CategoryId::new(id)?, name));
        }
        for (id, name, address) in CENTERS {
            services
                .center_info
                .insert(CenterInfo::new(CenterId::new(id)?, name, address));
        }
        for (id, name, category_id, center_id, amount) in ITEMS {
            let (_, category_name) = CATEGORIES[(category_id - 1) as usize];
            let (_, center_name, address) = CENTERS[(center_id - 1) as usize];
            let item = StockItem::new(
                StockId::new(id)?,
                name,
                PartsCategory::new(CategoryId::new(category_id)?, category_name),
                amount,
                now,
            )
            .with_center(CenterInfo::new(CenterId::new(center_id)?, center_name, address));
            services.stock_list.insert(item);
        }

        tracing::debug!(items = ITEMS.len(), "demo data seeded");
        Ok(services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CenterInfoService, PartsCategoryService, StockListService};

    #[test]
    fn demo_data_is_consistent_with_lookups() {
        let services = InMemoryServices::with_demo_data().unwrap();
        let categories = services.parts_category.get_category_info_data().unwrap();
        let centers = services.center_info.get_center_info_data().unwrap();
        let items = services.stock_list.get_all_stock_list_data().unwrap();

        assert_eq!(categories.len(), CATEGORIES.len());
        assert_eq!(centers.len(), CENTERS.len());
        assert_eq!(items.len(), ITEMS.len());
        for item in items {
            assert!(categories.contains(&item.category));
            assert!(centers.contains(item.center.as_ref().unwrap()));
        }
    }
}
