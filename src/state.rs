use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::AppConfig, dto::settings::Settings, reports::ReportCatalog, session::Session,
    store::Workspace,
};

#[derive(Clone)]
pub struct AppState {
    pub workspace: Arc<RwLock<Workspace>>,
    pub session: Arc<RwLock<Session>>,
    pub reports: Arc<ReportCatalog>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(workspace: Workspace, reports: ReportCatalog, settings: Settings) -> Self {
        Self {
            workspace: Arc::new(RwLock::new(workspace)),
            session: Arc::new(RwLock::new(Session::default())),
            reports: Arc::new(reports),
            settings: Arc::new(settings),
        }
    }

    pub fn from_config(config: &AppConfig, reports: ReportCatalog) -> Self {
        let workspace = if config.seed_demo_data {
            Workspace::seeded()
        } else {
            Workspace::default()
        };
        Self::new(workspace, reports, Settings::with_company(&config.company_name))
    }
}
