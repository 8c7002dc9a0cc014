//! Blocking YNAB API client
//!
//! Every request is made through an explicit [`ClientContext`] (base URL and
//! authorization) rather than process-wide state. Each call is a single
//! attempt; failures are reported, never retried.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::types::{
    BudgetSummary, BudgetSummaryResponse, CategoriesResponse, CategoryGroupRecord, DataEnvelope,
    ErrorEnvelope, MonthSummary, MonthsResponse, SaveMonthCategory, SaveMonthCategoryWrapper,
};
use crate::config::credentials::Credentials;
use crate::error::{TemplateError, TemplateResult};
use crate::models::{BudgetId, CategoryId, Money};
use crate::services::sync::CategoryUpdater;

pub const DEFAULT_API_URL: &str = "https://api.youneedabudget.com/v1";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Everything an outbound request needs to know about where and as whom
#[derive(Clone)]
pub struct ClientContext {
    base_url: String,
    authorization: String,
}

impl ClientContext {
    pub fn new(base_url: impl Into<String>, credentials: &Credentials) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            authorization: credentials.authorization(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn headers(&self) -> TemplateResult<HeaderMap> {
        let mut auth = HeaderValue::from_str(&self.authorization).map_err(|_| {
            TemplateError::Credentials("credentials contain characters not valid in a header".into())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);
        Ok(headers)
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("base_url", &self.base_url)
            .field("authorization", &"<redacted>")
            .finish()
    }
}

/// YNAB API client
pub struct YnabClient {
    http: Client,
    context: ClientContext,
}

impl YnabClient {
    /// Create a new client for the given context
    pub fn new(context: ClientContext) -> TemplateResult<Self> {
        let http = Client::builder()
            .default_headers(context.headers()?)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http, context })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> TemplateResult<T> {
        debug!(path, "GET");
        let response = self.http.get(self.context.url(path)).send()?;
        read_response(response)
    }

    fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> TemplateResult<T> {
        debug!(path, "PATCH");
        let response = self
            .http
            .patch(self.context.url(path))
            .body(serde_json::to_string(body)?)
            .send()?;
        read_response(response)
    }

    /// Look up a budget's ID by its display name
    pub fn find_budget_id(&self, name: &str) -> TemplateResult<BudgetId> {
        let response: BudgetSummaryResponse = self.get("/budgets")?;
        find_budget(&response.budgets, name)
    }

    /// Fetch all category groups, hidden ones included
    pub fn category_groups(&self, budget: BudgetId) -> TemplateResult<Vec<CategoryGroupRecord>> {
        let response: CategoriesResponse = self.get(&format!("/budgets/{}/categories", budget))?;
        Ok(response.category_groups)
    }

    /// The "to be budgeted" figure for the month containing `month`
    pub fn to_be_budgeted(&self, budget: BudgetId, month: NaiveDate) -> TemplateResult<Money> {
        let response: MonthsResponse = self.get(&format!("/budgets/{}/months", budget))?;
        find_to_be_budgeted(&response.months, month)
    }

    /// Set a category's budgeted amount for a month
    pub fn update_budgeted(
        &self,
        budget: BudgetId,
        month: NaiveDate,
        category: CategoryId,
        amount: Money,
    ) -> TemplateResult<()> {
        let body = SaveMonthCategoryWrapper {
            category: SaveMonthCategory { budgeted: amount },
        };
        let _: serde_json::Value = self.patch(
            &format!(
                "/budgets/{}/months/{}/categories/{}",
                budget,
                month_key(month),
                category
            ),
            &body,
        )?;
        Ok(())
    }

    /// An updater bound to one budget month
    pub fn month_updater(&self, budget: BudgetId, month: NaiveDate) -> MonthUpdater<'_> {
        MonthUpdater {
            client: self,
            budget,
            month,
        }
    }
}

/// Applies category updates to a fixed budget month
pub struct MonthUpdater<'a> {
    client: &'a YnabClient,
    budget: BudgetId,
    month: NaiveDate,
}

impl CategoryUpdater for MonthUpdater<'_> {
    fn update_budgeted(&self, category: CategoryId, amount: Money) -> TemplateResult<()> {
        self.client
            .update_budgeted(self.budget, self.month, category, amount)
    }
}

fn read_response<T: DeserializeOwned>(response: Response) -> TemplateResult<T> {
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        return Err(service_error(status.as_u16(), &body));
    }

    let envelope: DataEnvelope<T> = serde_json::from_str(&body)?;
    Ok(envelope.data)
}

/// Turn a non-success response into a service error
///
/// Falls back to the raw body when it is not the service's error envelope.
pub fn service_error(status: u16, body: &str) -> TemplateError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => TemplateError::Service {
            status,
            name: envelope.error.name,
            detail: envelope.error.detail,
        },
        Err(_) => TemplateError::Service {
            status,
            name: "unknown".into(),
            detail: body.trim().to_string(),
        },
    }
}

/// Find a budget by display name
pub fn find_budget(budgets: &[BudgetSummary], name: &str) -> TemplateResult<BudgetId> {
    budgets
        .iter()
        .find(|b| b.name == name)
        .map(|b| b.id)
        .ok_or_else(|| TemplateError::BudgetNotFound(name.to_string()))
}

/// Find the month summary whose date falls in the same calendar month
pub fn find_to_be_budgeted(months: &[MonthSummary], month: NaiveDate) -> TemplateResult<Money> {
    let prefix = month.format("%Y-%m").to_string();
    months
        .iter()
        .find(|m| m.month.starts_with(&prefix))
        .map(|m| m.to_be_budgeted)
        .ok_or(TemplateError::ToBeBudgetedNotFound(prefix))
}

/// The service's month path segment: first day of the month
pub fn month_key(month: NaiveDate) -> String {
    month.format("%Y-%m-01").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budgets() -> Vec<BudgetSummary> {
        vec![
            BudgetSummary {
                id: BudgetId::parse("11111111-1111-4111-8111-111111111111").unwrap(),
                name: "Old Budget".into(),
            },
            BudgetSummary {
                id: BudgetId::parse("22222222-2222-4222-8222-222222222222").unwrap(),
                name: "My Budget".into(),
            },
        ]
    }

    #[test]
    fn test_find_budget_by_name() {
        let id = find_budget(&budgets(), "My Budget").unwrap();
        assert_eq!(id.to_string(), "22222222-2222-4222-8222-222222222222");
    }

    #[test]
    fn test_find_budget_missing() {
        let err = find_budget(&budgets(), "Nope").unwrap_err();
        assert!(matches!(err, TemplateError::BudgetNotFound(ref n) if n == "Nope"));
    }

    #[test]
    fn test_find_to_be_budgeted_for_month() {
        let months = vec![
            MonthSummary {
                month: "2026-09-01".into(),
                to_be_budgeted: Money::from_units(10),
            },
            MonthSummary {
                month: "2026-10-01".into(),
                to_be_budgeted: Money::from_units(2000),
            },
        ];
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(find_to_be_budgeted(&months, today).unwrap(), Money::from_units(2000));

        let later = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        let err = find_to_be_budgeted(&months, later).unwrap_err();
        assert_eq!(err.to_string(), "To be budgeted amount not found for 2026-12");
    }

    #[test]
    fn test_service_error_from_envelope() {
        let err = service_error(
            401,
            r#"{"error":{"id":"401","name":"unauthorized","detail":"Unauthorized"}}"#,
        );
        assert_eq!(err.to_string(), "Request Error: 401 unauthorized:Unauthorized");
    }

    #[test]
    fn test_service_error_from_plain_body() {
        let err = service_error(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "Request Error: 502 unknown:Bad Gateway");
    }

    #[test]
    fn test_month_key() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(month_key(date), "2026-10-01");
    }

    #[test]
    fn test_context_trims_trailing_slash() {
        let creds = Credentials::new("secret", "Bearer");
        let context = ClientContext::new("http://localhost:9999/v1/", &creds);
        assert_eq!(context.url("/budgets"), "http://localhost:9999/v1/budgets");
        assert!(!format!("{:?}", context).contains("secret"));
    }
}
