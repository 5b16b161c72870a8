//! Hand-authored summary series for the dashboard and reports pages.
//!
//! None of these numbers are computed from the live record lists. The whole
//! catalog can be swapped for a JSON file at startup (`REPORTS_PATH`).

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatCard {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlySales {
    pub month: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SalesPoint {
    pub name: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryShare {
    pub name: String,
    /// Share in percent.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecentOrder {
    pub id: String,
    pub customer: String,
    pub date: String,
    pub amount: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Highlight {
    pub title: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportRange {
    #[default]
    ThisMonth,
    LastMonth,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummary {
    pub stats: Vec<StatCard>,
    pub monthly_sales: Vec<MonthlySales>,
    pub recent_orders: Vec<RecentOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportSummary {
    /// Echo of the selected range; the series are the same for every range.
    #[serde(default)]
    pub range: ReportRange,
    pub category_breakdown: Vec<CategoryShare>,
    pub monthly_sales: Vec<MonthlySales>,
    pub top_farmers: Vec<SalesPoint>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportCatalog {
    pub dashboard: DashboardSummary,
    pub reports: ReportSummary,
    pub top_products: Vec<SalesPoint>,
}

impl ReportCatalog {
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading report catalog {}", path.display()))?;
        let catalog = serde_json::from_str(&raw)
            .with_context(|| format!("parsing report catalog {}", path.display()))?;
        Ok(catalog)
    }

    pub fn report_for(&self, range: ReportRange) -> ReportSummary {
        ReportSummary {
            range,
            ..self.reports.clone()
        }
    }
}

impl Default for ReportCatalog {
    fn default() -> Self {
        let monthly_sales = months(&[
            ("Jan", 32000.0),
            ("Feb", 38000.0),
            ("Mar", 35000.0),
            ("Apr", 42000.0),
            ("May", 48000.0),
            ("Jun", 45230.0),
        ]);

        ReportCatalog {
            dashboard: DashboardSummary {
                stats: vec![
                    stat("Total Farmers", "248"),
                    stat("Total Products", "1,432"),
                    stat("Total Orders", "856"),
                    stat("Total Sales This Month", "$45,230"),
                ],
                monthly_sales: monthly_sales.clone(),
                recent_orders: vec![
                    recent("ORD-001", "Vanna Market", "2025-10-27", "$450", "Completed"),
                    recent("ORD-002", "Phnom Penh Fresh", "2025-10-27", "$320", "Pending"),
                    recent("ORD-003", "Central Grocery", "2025-10-26", "$780", "Completed"),
                    recent("ORD-004", "Local Market Co.", "2025-10-26", "$210", "Cancelled"),
                    recent("ORD-005", "Green Valley Store", "2025-10-25", "$560", "Completed"),
                ],
            },
            reports: ReportSummary {
                range: ReportRange::ThisMonth,
                category_breakdown: [
                    ("Vegetables", 45.0),
                    ("Fruits", 30.0),
                    ("Grains", 20.0),
                    ("Herbs", 5.0),
                ]
                .into_iter()
                .map(|(name, value)| CategoryShare {
                    name: name.into(),
                    value,
                })
                .collect(),
                monthly_sales,
                top_farmers: points(&[
                    ("Sok Pisey", 12500.0),
                    ("Vanna Srey", 10800.0),
                    ("Sreymom Heng", 9200.0),
                    ("Chan Dara", 7600.0),
                    ("Bunthoeun Ly", 6400.0),
                ]),
                highlights: vec![
                    highlight("Total Revenue", "$273,230", "+12% from last period"),
                    highlight("Average Order Value", "$319", "+5% from last period"),
                    highlight("Active Farmers", "248", "+8 new this month"),
                ],
            },
            top_products: points(&[
                ("Organic Rice", 450.0),
                ("Mangoes", 380.0),
                ("Corn", 320.0),
                ("Fresh Tomatoes", 280.0),
                ("Cucumbers", 240.0),
            ]),
        }
    }
}

fn stat(title: &str, value: &str) -> StatCard {
    StatCard {
        title: title.into(),
        value: value.into(),
    }
}

fn recent(id: &str, customer: &str, date: &str, amount: &str, status: &str) -> RecentOrder {
    RecentOrder {
        id: id.into(),
        customer: customer.into(),
        date: date.into(),
        amount: amount.into(),
        status: status.into(),
    }
}

fn highlight(title: &str, value: &str, change: &str) -> Highlight {
    Highlight {
        title: title.into(),
        value: value.into(),
        change: change.into(),
    }
}

fn months(series: &[(&str, f64)]) -> Vec<MonthlySales> {
    series
        .iter()
        .map(|&(month, sales)| MonthlySales {
            month: month.into(),
            sales,
        })
        .collect()
}

fn points(series: &[(&str, f64)]) -> Vec<SalesPoint> {
    series
        .iter()
        .map(|&(name, sales)| SalesPoint {
            name: name.into(),
            sales,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_echoed_without_changing_series() {
        let catalog = ReportCatalog::default();
        let last = catalog.report_for(ReportRange::LastMonth);
        assert_eq!(last.range, ReportRange::LastMonth);
        assert_eq!(last.monthly_sales, catalog.reports.monthly_sales);
        assert_eq!(last.top_farmers.len(), 5);
    }

    #[tokio::test]
    async fn catalog_loads_from_a_json_file() {
        let mut catalog = ReportCatalog::default();
        catalog.top_products.truncate(2);
        let path = std::env::temp_dir().join(format!("reports-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, serde_json::to_vec(&catalog).unwrap()).unwrap();

        let loaded = ReportCatalog::load(&path).await.unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.top_products.len(), 2);
        assert_eq!(loaded, catalog);
    }

    #[tokio::test]
    async fn missing_catalog_file_is_an_error() {
        let path = std::env::temp_dir().join("no-such-report-catalog.json");
        assert!(ReportCatalog::load(&path).await.is_err());
    }

    #[test]
    fn range_uses_kebab_case_names() {
        let range: ReportRange = serde_json::from_str("\"last-month\"").unwrap();
        assert_eq!(range, ReportRange::LastMonth);
    }
}
