use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Farmer;

/// Fields of the add/edit farmer dialog.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct FarmerForm {
    pub name: String,
    pub location: String,
    pub contact: String,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct FarmerList {
    #[schema(value_type = Vec<Farmer>)]
    pub items: Vec<Farmer>,
}
