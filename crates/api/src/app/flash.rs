//! Flash attributes: messages that survive exactly one redirect.
//!
//! Attributes live server-side in a [`FlashStore`]; the browser only carries
//! an opaque id in the `STOCKLIST_FLASH` cookie. The next rendered view takes
//! the entry out of the store and clears the cookie.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use uuid::Uuid;

pub const FLASH_COOKIE: &str = "STOCKLIST_FLASH";

const CLEAR_COOKIE: &str = "STOCKLIST_FLASH=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

pub type Attributes = Map<String, Value>;

#[derive(Debug)]
struct FlashEntry {
    attributes: Attributes,
    stored_at: Instant,
}

/// Pending flash attributes keyed by cookie id. Entries expire after `ttl`
/// whether or not they were read.
#[derive(Debug)]
pub struct FlashStore {
    entries: Mutex<HashMap<Uuid, FlashEntry>>,
    ttl: Duration,
}

impl FlashStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Store attributes for the next request; returns the cookie id.
    pub fn put(&self, attributes: Attributes) -> Uuid {
        let id = Uuid::new_v4();
        let ttl = self.ttl;
        let mut entries = self.entries();
        entries.retain(|_, e| e.stored_at.elapsed() < ttl);
        entries.insert(
            id,
            FlashEntry {
                attributes,
                stored_at: Instant::now(),
            },
        );
        id
    }

    /// Remove and return the attributes for `id`, unless expired.
    pub fn take(&self, id: Uuid) -> Option<Attributes> {
        let entry = self.entries().remove(&id)?;
        (entry.stored_at.elapsed() < self.ttl).then_some(entry.attributes)
    }

    /// Read without consuming.
    pub fn peek(&self, id: Uuid) -> Option<Attributes> {
        self.entries()
            .get(&id)
            .filter(|e| e.stored_at.elapsed() < self.ttl)
            .map(|e| e.attributes.clone())
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Entries are inserted and removed whole, so a poisoned map is still consistent.
    fn entries(&self) -> MutexGuard<'_, HashMap<Uuid, FlashEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("flash store lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

/// `Set-Cookie` value pointing the browser at a stored flash entry.
pub fn set_cookie_value(id: Uuid) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!("{FLASH_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")).ok()
}

/// `Set-Cookie` value that drops the flash cookie.
pub fn clear_cookie_value() -> HeaderValue {
    HeaderValue::from_static(CLEAR_COOKIE)
}

/// Flash id from the request's `Cookie` headers, if one is present and valid.
pub fn flash_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Flash cookie carried by the current request (not yet consumed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncomingFlash(pub Option<Uuid>);

impl IncomingFlash {
    pub fn consume(self, store: &FlashStore) -> ConsumedFlash {
        ConsumedFlash {
            attributes: self.0.and_then(|id| store.take(id)).unwrap_or_default(),
            clear_cookie: self.0.is_some(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(flash_id_from_headers(&parts.headers)))
    }
}

/// Attributes taken out of the store for the view being rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumedFlash {
    pub attributes: Attributes,
    pub clear_cookie: bool,
}
