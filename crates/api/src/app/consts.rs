//! Route paths, view names and model attribute names shared by handlers
//! and tests.

pub mod urls {
    pub const HEALTH: &str = "/health";
    pub const STOCK_LIST: &str = "/stock-list";
    pub const STOCK_LIST_SEARCH: &str = "/stock-list/search";
    pub const STOCK_LIST_REGISTER: &str = "/stock-list/register";
    pub const STOCK_LIST_UPDATE: &str = "/stock-list/update";
    pub const STOCK_LIST_DELETE: &str = "/stock-list/delete";

    pub fn stock_list_update(stock_id: i32) -> String {
        format!("{STOCK_LIST_UPDATE}/{stock_id}")
    }
}

pub mod views {
    pub const STOCK_LIST_INDEX: &str = "admin/stock-list/index";
    pub const STOCK_LIST_REGISTER: &str = "admin/stock-list/register";
    pub const STOCK_LIST_UPDATE: &str = "admin/stock-list/update";
}

pub mod attrs {
    pub const STOCK_ITEM_LIST: &str = "stockItemList";
    pub const STOCK_ITEM_UPDATE_FORM: &str = "stockItemUpdateForm";
    pub const STOCK_LIST_FORM: &str = "stockListForm";
    pub const CATEGORIES: &str = "categories";
    pub const CENTERS: &str = "centers";
    pub const ERROR_MSG: &str = "errorMsg";
    pub const SUCCESS_MSG: &str = "successMsg";
}

pub mod messages {
    pub const REGISTERED: &str = "stock item registered";
    pub const UPDATED: &str = "stock item updated";
    pub const DELETED: &str = "stock item deleted";
    pub const NOT_FOUND: &str = "stock item not found";
}
