//! Live service session
//!
//! Resolves configuration and credentials, connects to the service, and
//! fetches the budget's catalog. Built once per run by the modes that need
//! the service.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::api::{ClientContext, YnabClient};
use crate::config::{AppPaths, Credentials, Settings};
use crate::error::TemplateResult;
use crate::models::{BudgetId, Money};
use crate::services::catalog::CategoryCatalog;

/// Overrides supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Credentials file; defaults to `credentials.json` in the config dir
    pub credentials: Option<PathBuf>,
    /// Budget display name; defaults to the configured name
    pub budget: Option<String>,
}

/// A connected client, the selected budget, and its catalog
pub struct Session {
    pub client: YnabClient,
    pub budget: BudgetId,
    pub catalog: CategoryCatalog,
}

impl Session {
    pub fn connect(options: &ConnectOptions) -> TemplateResult<Self> {
        let paths = AppPaths::new()?;
        let settings = Settings::load(&paths)?;

        let credentials_path = options
            .credentials
            .clone()
            .unwrap_or_else(|| paths.credentials_file());
        let credentials = Credentials::load(&credentials_path)?;

        let client = YnabClient::new(ClientContext::new(settings.api_url.as_str(), &credentials))?;

        let budget_name = options.budget.as_deref().unwrap_or(&settings.budget_name);
        let budget = client.find_budget_id(budget_name)?;
        debug!(budget = %budget.short(), name = budget_name, "found budget");

        let catalog = CategoryCatalog::from_records(client.category_groups(budget)?)?;
        debug!(categories = catalog.len(), "loaded category catalog");

        Ok(Self {
            client,
            budget,
            catalog,
        })
    }

    /// The current calendar month, by local time
    pub fn current_month() -> NaiveDate {
        Local::now().date_naive()
    }

    /// This month's "to be budgeted" figure
    pub fn to_be_budgeted(&self, month: NaiveDate) -> TemplateResult<Money> {
        self.client.to_be_budgeted(self.budget, month)
    }
}
