use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::form,
    models::{Order, OrderItem, OrderStatus},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct OrderItemForm {
    pub product_name: String,
    #[serde(deserialize_with = "form::lenient_int")]
    #[schema(value_type = Option<String>)]
    pub quantity: Option<i64>,
    #[serde(deserialize_with = "form::lenient_float")]
    #[schema(value_type = Option<String>)]
    pub price: Option<f64>,
}

impl From<OrderItemForm> for OrderItem {
    fn from(form: OrderItemForm) -> Self {
        OrderItem {
            product_name: form.product_name,
            quantity: form.quantity,
            price: form.price,
        }
    }
}

/// Editable order fields. The status has its own update path.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct OrderForm {
    pub customer: String,
    pub farmer: String,
    #[serde(deserialize_with = "form::lenient_float")]
    #[schema(value_type = Option<String>)]
    pub total: Option<f64>,
    #[serde(deserialize_with = "form::lenient_date")]
    #[schema(value_type = Option<String>, example = "2025-10-27")]
    pub date: Option<NaiveDate>,
    pub items: Vec<OrderItemForm>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLine {
    #[serde(flatten)]
    pub item: OrderItem,
    pub subtotal: Option<f64>,
}

/// Order details dialog: the stored order plus computed line subtotals.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDetails {
    pub order: Order,
    pub lines: Vec<OrderLine>,
    /// Sum of line subtotals, shown next to the stored `order.total`.
    pub items_total: Option<f64>,
}

impl From<Order> for OrderDetails {
    fn from(order: Order) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| OrderLine {
                item: item.clone(),
                subtotal: item.subtotal(),
            })
            .collect();
        let items_total = order.items_total();
        OrderDetails {
            order,
            lines,
            items_total,
        }
    }
}
