use std::sync::Arc;

use axum::{
    extract::{Extension, Form, Path, Query},
    response::{IntoResponse, Response},
};

use stocklist_infra::ServiceError;
use stocklist_inventory::StockListForm;

use crate::app::consts::{attrs, messages, urls, views};
use crate::app::errors::{validation_message, AppError};
use crate::app::flash::{FlashStore, IncomingFlash};
use crate::app::services::AppServices;
use crate::app::view::{redirect_with_flash, View};

type HandlerResult = Result<Response, AppError>;

/// Index view with lookup data every stock list screen shows.
fn index_view(services: &AppServices) -> Result<View, AppError> {
    let categories = services.parts_category.get_category_info_data()?;
    View::new(views::STOCK_LIST_INDEX).attribute(attrs::CATEGORIES, &categories)
}

/// Register/update view with the edit form and both lookup lists.
fn edit_view(services: &AppServices, name: &'static str, form: &StockListForm) -> Result<View, AppError> {
    let categories = services.parts_category.get_category_info_data()?;
    let centers = services.center_info.get_center_info_data()?;
    View::new(name)
        .attribute(attrs::STOCK_ITEM_UPDATE_FORM, form)?
        .attribute(attrs::CATEGORIES, &categories)?
        .attribute(attrs::CENTERS, &centers)
}

pub async fn index(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(flash_store): Extension<Arc<FlashStore>>,
    flash: IncomingFlash,
) -> HandlerResult {
    let items = services.stock_list.get_all_stock_list_data()?;

    Ok(index_view(&services)?
        .attribute(attrs::STOCK_ITEM_LIST, &items)?
        .attribute(attrs::STOCK_LIST_FORM, &StockListForm::default())?
        .with_flash(flash.consume(&flash_store))
        .into_response())
}

pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(flash_store): Extension<Arc<FlashStore>>,
    flash: IncomingFlash,
    Query(form): Query<StockListForm>,
) -> HandlerResult {
    let view = index_view(&services)?
        .attribute(attrs::STOCK_LIST_FORM, &form)?
        .with_flash(flash.consume(&flash_store));

    if let Err(e) = form.validate_search() {
        tracing::debug!(error = %e, "stock search rejected");
        return Ok(view
            .attribute(attrs::ERROR_MSG, &validation_message(e))?
            .into_response());
    }

    let items = services.stock_list.search_stock_list(
        form.category_id,
        form.part_name.clone(),
        form.quantity_op.clone(),
        form.quantity,
    )?;

    tracing::debug!(hits = items.len(), "stock search");
    Ok(view.attribute(attrs::STOCK_ITEM_LIST, &items)?.into_response())
}

pub async fn register_form(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(flash_store): Extension<Arc<FlashStore>>,
    flash: IncomingFlash,
) -> HandlerResult {
    Ok(edit_view(&services, views::STOCK_LIST_REGISTER, &StockListForm::default())?
        .with_flash(flash.consume(&flash_store))
        .into_response())
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(flash_store): Extension<Arc<FlashStore>>,
    Form(form): Form<StockListForm>,
) -> HandlerResult {
    let back = urls::STOCK_LIST_REGISTER;

    if let Err(e) = form.validate_register() {
        tracing::debug!(error = %e, "stock registration rejected");
        return Ok(redirect_with_flash(&flash_store, back, attrs::ERROR_MSG, validation_message(e)));
    }

    let name = form.trimmed_part_name().unwrap_or_default();
    if let Some(rejected) = rejection(services.stock_list.stock_duplication_check(name, None))? {
        return Ok(redirect_with_flash(&flash_store, back, attrs::ERROR_MSG, rejected));
    }

    match services.stock_list.register_stock_item(&form) {
        Ok(_) => Ok(redirect_with_flash(
            &flash_store,
            urls::STOCK_LIST,
            attrs::SUCCESS_MSG,
            messages::REGISTERED,
        )),
        Err(e @ (ServiceError::Duplicate(_) | ServiceError::Validation(_))) => {
            Ok(redirect_with_flash(&flash_store, back, attrs::ERROR_MSG, e.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn update_form(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(flash_store): Extension<Arc<FlashStore>>,
    flash: IncomingFlash,
    Path(stock_id): Path<i32>,
) -> HandlerResult {
    let item = match services.stock_list.get_stock_item_data(stock_id) {
        Ok(item) => item,
        Err(ServiceError::NotFound) => return Ok(not_found(&flash_store)),
        Err(e) => return Err(e.into()),
    };

    Ok(edit_view(&services, views::STOCK_LIST_UPDATE, &StockListForm::from_item(&item))?
        .with_flash(flash.consume(&flash_store))
        .into_response())
}

pub async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(flash_store): Extension<Arc<FlashStore>>,
    Form(form): Form<StockListForm>,
) -> HandlerResult {
    let back = match form.stock_id {
        Some(id) => urls::stock_list_update(id),
        None => urls::STOCK_LIST.to_string(),
    };

    if let Err(e) = form.validate_update() {
        tracing::debug!(error = %e, "stock update rejected");
        return Ok(redirect_with_flash(&flash_store, &back, attrs::ERROR_MSG, validation_message(e)));
    }

    // The item must exist before its new name is checked against the others.
    if let Some(stock_id) = form.stock_id {
        match services.stock_list.get_stock_item_data(stock_id) {
            Ok(_) => {}
            Err(ServiceError::NotFound) => return Ok(not_found(&flash_store)),
            Err(e) => return Err(e.into()),
        }
    }

    let name = form.trimmed_part_name().unwrap_or_default();
    if let Some(rejected) = rejection(services.stock_list.stock_duplication_check(name, form.stock_id))? {
        return Ok(redirect_with_flash(&flash_store, &back, attrs::ERROR_MSG, rejected));
    }

    match services.stock_list.update_stock_item(&form) {
        Ok(_) => Ok(redirect_with_flash(
            &flash_store,
            urls::STOCK_LIST,
            attrs::SUCCESS_MSG,
            messages::UPDATED,
        )),
        Err(ServiceError::NotFound) => Ok(not_found(&flash_store)),
        Err(e @ (ServiceError::Duplicate(_) | ServiceError::Validation(_))) => {
            Ok(redirect_with_flash(&flash_store, &back, attrs::ERROR_MSG, e.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(flash_store): Extension<Arc<FlashStore>>,
    Path(stock_id): Path<i32>,
) -> HandlerResult {
    match services.stock_list.delete_stock_item(stock_id) {
        Ok(()) => Ok(redirect_with_flash(
            &flash_store,
            urls::STOCK_LIST,
            attrs::SUCCESS_MSG,
            messages::DELETED,
        )),
        Err(ServiceError::NotFound) => Ok(not_found(&flash_store)),
        Err(e) => Err(e.into()),
    }
}

/// Back to the list with the unknown-item message.
fn not_found(flash_store: &FlashStore) -> Response {
    redirect_with_flash(flash_store, urls::STOCK_LIST, attrs::ERROR_MSG, messages::NOT_FOUND)
}

/// Duplicate names are shown to the user; any other failure is a 5xx.
fn rejection(result: Result<(), ServiceError>) -> Result<Option<String>, AppError> {
    match result {
        Ok(()) => Ok(None),
        Err(e @ ServiceError::Duplicate(_)) => Ok(Some(e.to_string())),
        Err(e) => Err(e.into()),
    }
}
