use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "KHR")]
    Khr,
    #[serde(rename = "EUR")]
    Eur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Language {
    English,
    Khmer,
}

/// Display preferences. Saving them changes nothing anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Settings {
    pub company_name: String,
    pub currency: Currency,
    pub language: Language,
}

impl Settings {
    pub fn with_company(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            currency: Currency::Usd,
            language: Language::English,
        }
    }
}
