use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::form, models::Product, reports::SalesPoint};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    #[serde(deserialize_with = "form::lenient_float")]
    #[schema(value_type = Option<String>, example = "2.5")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "form::lenient_int")]
    #[schema(value_type = Option<String>, example = "500")]
    pub quantity: Option<i64>,
    pub farmer: String,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

/// Products page: the filtered table plus the top sellers chart.
#[derive(Serialize, ToSchema)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub top_selling: Vec<SalesPoint>,
}
