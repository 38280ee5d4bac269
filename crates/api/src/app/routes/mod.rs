use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::app::consts::urls;

pub mod stock_list;
pub mod system;

/// Router for the stock list screens.
pub fn router() -> Router {
    Router::new()
        .route(urls::STOCK_LIST, get(stock_list::index))
        .route(urls::STOCK_LIST_SEARCH, get(stock_list::search))
        .route(
            urls::STOCK_LIST_REGISTER,
            get(stock_list::register_form).post(stock_list::register),
        )
        .route(
            urls::STOCK_LIST_UPDATE,
            patch(stock_list::update).put(stock_list::update),
        )
        .route(
            &format!("{}/:stock_id", urls::STOCK_LIST_UPDATE),
            get(stock_list::update_form),
        )
        .route(
            &format!("{}/:stock_id", urls::STOCK_LIST_DELETE),
            post(stock_list::delete).delete(stock_list::delete),
        )
}
