//! Demo records loaded at startup unless `SEED_DEMO_DATA=false`.

use chrono::NaiveDate;

use crate::models::{
    Farmer, FarmerStatus, Order, OrderItem, OrderStatus, Product, StockStatus, User, UserRole,
    UserStatus,
};

pub fn farmers() -> Vec<Farmer> {
    [
        ("F001", "Sok Pisey", "Kampong Cham", "012-345-678", 12, FarmerStatus::Active),
        ("F002", "Chan Dara", "Siem Reap", "012-456-789", 8, FarmerStatus::Active),
        ("F003", "Vanna Srey", "Battambang", "012-567-890", 15, FarmerStatus::Active),
        ("F004", "Kosal Pich", "Kampot", "012-678-901", 6, FarmerStatus::Inactive),
        ("F005", "Sreymom Heng", "Kandal", "012-789-012", 10, FarmerStatus::Active),
        ("F006", "Bunthoeun Ly", "Prey Veng", "012-890-123", 9, FarmerStatus::Active),
    ]
    .into_iter()
    .map(|(id, name, location, contact, products, status)| Farmer {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        contact: contact.into(),
        products,
        status,
    })
    .collect()
}

pub fn products() -> Vec<Product> {
    [
        ("P001", "Organic Rice", "Grains", 2.5, 500, "Sok Pisey"),
        ("P002", "Fresh Tomatoes", "Vegetables", 1.2, 200, "Chan Dara"),
        ("P003", "Green Beans", "Vegetables", 1.8, 0, "Vanna Srey"),
        ("P004", "Mangoes", "Fruits", 3.0, 150, "Sreymom Heng"),
        ("P005", "Corn", "Grains", 1.5, 300, "Bunthoeun Ly"),
        ("P006", "Cucumbers", "Vegetables", 0.8, 180, "Chan Dara"),
        ("P007", "Bananas", "Fruits", 1.0, 0, "Sreymom Heng"),
    ]
    .into_iter()
    .map(|(id, name, category, price, quantity, farmer)| Product {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        price: Some(price),
        quantity: Some(quantity),
        farmer: farmer.into(),
        status: StockStatus::for_quantity(Some(quantity)),
    })
    .collect()
}

pub fn orders() -> Vec<Order> {
    vec![
        order(
            "ORD-001",
            "Vanna Market",
            "Sok Pisey",
            450.0,
            (2025, 10, 27),
            OrderStatus::Completed,
            &[("Organic Rice", 100, 2.5), ("Fresh Tomatoes", 100, 1.2)],
        ),
        order(
            "ORD-002",
            "Phnom Penh Fresh",
            "Chan Dara",
            320.0,
            (2025, 10, 27),
            OrderStatus::Pending,
            &[("Cucumbers", 200, 0.8), ("Fresh Tomatoes", 100, 1.2)],
        ),
        order(
            "ORD-003",
            "Central Grocery",
            "Vanna Srey",
            780.0,
            (2025, 10, 26),
            OrderStatus::Completed,
            &[("Green Beans", 300, 1.8), ("Cucumbers", 150, 0.8)],
        ),
        order(
            "ORD-004",
            "Local Market Co.",
            "Sreymom Heng",
            210.0,
            (2025, 10, 26),
            OrderStatus::Cancelled,
            &[("Bananas", 210, 1.0)],
        ),
        order(
            "ORD-005",
            "Green Valley Store",
            "Bunthoeun Ly",
            560.0,
            (2025, 10, 25),
            OrderStatus::Completed,
            &[("Corn", 200, 1.5), ("Organic Rice", 100, 2.5)],
        ),
    ]
}

pub fn users() -> Vec<User> {
    [
        ("U001", "Sophea Chan", "sophea@agriconnect.com", UserRole::Admin, UserStatus::Active),
        ("U002", "Dara Kim", "dara@agriconnect.com", UserRole::Staff, UserStatus::Active),
        ("U003", "Pisey Rath", "pisey@agriconnect.com", UserRole::Staff, UserStatus::Active),
        ("U004", "Vibol Chea", "vibol@agriconnect.com", UserRole::Staff, UserStatus::Disabled),
    ]
    .into_iter()
    .map(|(id, name, email, role, status)| User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        status,
    })
    .collect()
}

fn order(
    id: &str,
    customer: &str,
    farmer: &str,
    total: f64,
    (year, month, day): (i32, u32, u32),
    status: OrderStatus,
    items: &[(&str, i64, f64)],
) -> Order {
    Order {
        id: id.into(),
        customer: customer.into(),
        farmer: farmer.into(),
        total: Some(total),
        date: NaiveDate::from_ymd_opt(year, month, day),
        status,
        items: items
            .iter()
            .map(|&(product_name, quantity, price)| OrderItem {
                product_name: product_name.into(),
                quantity: Some(quantity),
                price: Some(price),
            })
            .collect(),
    }
}
