use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub company_name: String,
    pub seed_demo_data: bool,
    /// JSON file replacing the built-in report series.
    pub reports_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let company_name = env::var("COMPANY_NAME").unwrap_or_else(|_| "AgriConnect".to_string());
        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(raw) => parse_flag(&raw)?,
            Err(_) => true,
        };
        let reports_path = env::var("REPORTS_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Ok(Self {
            host,
            port,
            company_name,
            seed_demo_data,
            reports_path,
        })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("SEED_DEMO_DATA must be a boolean, got {other:?}"),
    }
}
