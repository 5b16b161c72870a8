use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FarmerStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Farmer {
    pub id: String,
    pub name: String,
    pub location: String,
    pub contact: String,
    /// Listed product count; maintained by hand, never derived from the product list.
    pub products: u32,
    pub status: FarmerStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    pub fn for_quantity(quantity: Option<i64>) -> Self {
        match quantity {
            Some(q) if q > 0 => StockStatus::InStock,
            _ => StockStatus::OutOfStock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Unit price in USD; `None` when the form value was not a number.
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    /// Name of the supplying farmer, not a farmer id.
    pub farmer: String,
    pub status: StockStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl OrderItem {
    pub fn subtotal(&self) -> Option<f64> {
        Some(self.quantity? as f64 * self.price?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub farmer: String,
    /// Stored as entered; may differ from the sum of `items`.
    pub total: Option<f64>,
    pub date: Option<NaiveDate>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of line subtotals, `None` if any line has an invalid number.
    pub fn items_total(&self) -> Option<f64> {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    Admin,
    Staff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserStatus {
    Active,
    Disabled,
}

impl UserStatus {
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Disabled,
            UserStatus::Disabled => UserStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}
