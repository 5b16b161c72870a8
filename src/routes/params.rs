use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{models::StockStatus, reports::ReportRange};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive search text.
    pub q: Option<String>,
}

impl SearchQuery {
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl StockFilter {
    pub fn matches(&self, status: StockStatus) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::InStock => status == StockStatus::InStock,
            StockFilter::OutOfStock => status == StockStatus::OutOfStock,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductQuery {
    /// Matches product name or category.
    pub q: Option<String>,
    pub status: Option<StockFilter>,
}

impl ProductQuery {
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct OrderListQuery {
    /// Matches customer or order id.
    pub q: Option<String>,
    /// Exact order date, `YYYY-MM-DD`.
    pub date: Option<String>,
}

impl OrderListQuery {
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct DeleteQuery {
    /// Must be `true` for the delete to take effect.
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct ReportQuery {
    pub range: Option<ReportRange>,
}
