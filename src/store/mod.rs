//! In-memory working set owned by the application root.

pub mod ids;
pub mod record_list;
pub mod records;
pub mod seed;

pub use record_list::{Record, RecordList, RemoveOutcome};

use crate::models::{Farmer, Order, Product, User};

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub farmers: RecordList<Farmer>,
    pub products: RecordList<Product>,
    pub orders: RecordList<Order>,
    pub users: RecordList<User>,
}

impl Workspace {
    pub fn seeded() -> Self {
        Self {
            farmers: RecordList::seeded(seed::farmers()),
            products: RecordList::seeded(seed::products()),
            orders: RecordList::seeded(seed::orders()),
            users: RecordList::seeded(seed::users()),
        }
    }
}
