use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stocklist_core::DomainError;

/// Quantity comparison used by stock search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
}

impl QuantityOp {
    pub const ALL: [QuantityOp; 5] = [
        QuantityOp::Eq,
        QuantityOp::Gt,
        QuantityOp::Lt,
        QuantityOp::Ge,
        QuantityOp::Le,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuantityOp::Eq => "=",
            QuantityOp::Gt => ">",
            QuantityOp::Lt => "<",
            QuantityOp::Ge => ">=",
            QuantityOp::Le => "<=",
        }
    }

    /// `actual <op> threshold`.
    pub fn matches(self, actual: i32, threshold: i32) -> bool {
        match self {
            QuantityOp::Eq => actual == threshold,
            QuantityOp::Gt => actual > threshold,
            QuantityOp::Lt => actual < threshold,
            QuantityOp::Ge => actual >= threshold,
            QuantityOp::Le => actual <= threshold,
        }
    }
}

impl core::fmt::Display for QuantityOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityOp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the HTML-escaped spellings browsers sometimes submit.
        match s.trim() {
            "=" | "==" => Ok(QuantityOp::Eq),
            ">" | "&gt;" => Ok(QuantityOp::Gt),
            "<" | "&lt;" => Ok(QuantityOp::Lt),
            ">=" | "&gt;=" => Ok(QuantityOp::Ge),
            "<=" | "&lt;=" => Ok(QuantityOp::Le),
            other => Err(DomainError::validation(format!(
                "unknown quantity operator: {other:?}"
            ))),
        }
    }
}
