pub mod farmers;
pub mod form;
pub mod orders;
pub mod products;
pub mod session;
pub mod settings;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

/// Result of a delete request; `deleted` is false when the confirmation was declined.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResult {
    pub id: String,
    pub deleted: bool,
}
