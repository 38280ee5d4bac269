//! Rendered views and redirects.
//!
//! A view renders as `{"view": <name>, "model": {...}}` with `200 OK`; the
//! front end picks its template by view name. Redirects are `303 See Other`.

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::app::errors::AppError;
use crate::app::flash::{self, Attributes, ConsumedFlash, FlashStore};

#[derive(Debug, Clone)]
pub struct View {
    name: &'static str,
    model: Attributes,
    clear_flash_cookie: bool,
}

impl View {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            model: Attributes::new(),
            clear_flash_cookie: false,
        }
    }

    pub fn model(&self) -> &Attributes {
        &self.model
    }

    /// Add a model attribute, replacing any previous value under `name`.
    pub fn attribute<T>(mut self, name: &'static str, value: &T) -> Result<Self, AppError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(|source| AppError::Render { name, source })?;
        self.model.insert(name.to_string(), value);
        Ok(self)
    }

    /// Merge flash attributes; attributes set by the handler win.
    pub fn with_flash(mut self, flash: ConsumedFlash) -> Self {
        for (key, value) in flash.attributes {
            self.model.entry(key).or_insert(value);
        }
        self.clear_flash_cookie |= flash.clear_cookie;
        self
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::OK,
            Json(json!({
                "view": self.name,
                "model": Value::Object(self.model),
            })),
        )
            .into_response();

        if self.clear_flash_cookie {
            response
                .headers_mut()
                .append(SET_COOKIE, flash::clear_cookie_value());
        }
        response
    }
}

/// `303 See Other` to `location`, carrying one flash attribute.
pub fn redirect_with_flash(
    store: &FlashStore,
    location: &str,
    key: &'static str,
    message: impl Into<String>,
) -> Response {
    let mut attributes = Attributes::new();
    attributes.insert(key.to_string(), Value::String(message.into()));
    let id = store.put(attributes);

    let mut response = Redirect::to(location).into_response();
    match flash::set_cookie_value(id) {
        Some(cookie) => {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
        None => tracing::warn!(%id, "flash cookie could not be encoded; message dropped"),
    }
    response
}
