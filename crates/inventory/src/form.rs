//! Request-scoped binding for the stock list screens.
//!
//! One form type backs search, register and update. Binding is lenient: a
//! numeric field whose text does not parse binds as `None` rather than
//! failing the request, and blank text binds as `None` for every field.
//! Which fields are *required* depends on the operation, so that part of
//! validation lives in the `validate_*` methods rather than on the fields.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use stocklist_core::{DomainError, DomainResult};

use crate::item::StockItem;

pub const QUANTITY_MAX: i32 = 99_999;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StockListForm {
    #[serde(default, deserialize_with = "lenient::int")]
    #[validate(range(min = 1, message = "stock id must be a positive number"))]
    pub stock_id: Option<i32>,

    #[serde(default, deserialize_with = "lenient::text")]
    #[validate(length(max = 20, message = "part name must be at most 20 characters"))]
    pub part_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::int")]
    #[validate(range(min = 1, message = "category id must be a positive number"))]
    pub category_id: Option<i32>,

    #[serde(default, deserialize_with = "lenient::int")]
    #[validate(range(min = 1, message = "center id must be a positive number"))]
    pub center_id: Option<i32>,

    #[serde(default, deserialize_with = "lenient::int")]
    #[validate(range(min = 0, max = 99999, message = "quantity must be between 0 and 99999"))]
    pub quantity: Option<i32>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub quantity_op: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: Option<String>,
}

impl StockListForm {
    /// Form pre-filled from an existing item (update screen).
    pub fn from_item(item: &StockItem) -> Self {
        Self {
            stock_id: Some(item.stock_id.get()),
            part_name: Some(item.name.clone()),
            category_id: Some(item.category.category_id.get()),
            center_id: item.center.as_ref().map(|c| c.center_id.get()),
            quantity: Some(item.amount),
            quantity_op: None,
            description: item.description.clone(),
        }
    }

    /// Part name with surrounding whitespace removed; `None` when blank.
    pub fn trimmed_part_name(&self) -> Option<&str> {
        self.part_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Search needs at least one criterion once lenient binding is done.
    pub fn validate_search(&self) -> DomainResult<()> {
        let mut messages = field_messages(self.validate());
        if self.category_id.is_none() && self.trimmed_part_name().is_none() && self.quantity.is_none() {
            messages.push("enter at least one search condition".to_string());
        }
        into_result(messages)
    }

    pub fn validate_register(&self) -> DomainResult<()> {
        let mut messages = field_messages(self.validate());
        if self.trimmed_part_name().is_none() {
            messages.push("part name is required".to_string());
        }
        if self.category_id.is_none() {
            messages.push("category is required".to_string());
        }
        if self.quantity.is_none() {
            messages.push("quantity is required".to_string());
        }
        into_result(messages)
    }

    /// Category may be omitted on update; the stored one is kept.
    pub fn validate_update(&self) -> DomainResult<()> {
        let mut messages = field_messages(self.validate());
        if self.stock_id.is_none() {
            messages.push("stock id is required".to_string());
        }
        if self.trimmed_part_name().is_none() {
            messages.push("part name is required".to_string());
        }
        if self.quantity.is_none() {
            messages.push("quantity is required".to_string());
        }
        into_result(messages)
    }
}

fn field_messages(result: Result<(), ValidationErrors>) -> Vec<String> {
    let Err(errors) = result else {
        return Vec::new();
    };

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect()
}

fn into_result(messages: Vec<String>) -> DomainResult<()> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(messages.join("\n")))
    }
}

/// Serde adapters that never reject a submitted value.
pub mod lenient {
    use serde::{Deserialize, Deserializer};

    /// `"12"` → `Some(12)`; `"12x"`, `"abc"`, `""` → `None`.
    pub fn parse_int(raw: &str) -> Option<i32> {
        raw.trim().parse::<i32>().ok()
    }

    /// Whitespace-only text → `None`; anything else is kept verbatim.
    pub fn non_blank(raw: String) -> Option<String> {
        if raw.trim().is_empty() { None } else { Some(raw) }
    }

    pub fn int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_int))
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(non_blank))
    }
}
