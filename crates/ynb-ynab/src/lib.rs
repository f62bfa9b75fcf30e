//! YNAB API adapter.
//!
//! Implements the `ynb-core` `CategoryProvider` port over the YNAB v1 HTTP
//! API. Status codes and body decoding are factored out of the transport so
//! they can be tested without a network.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use ynb_core::{budget::CategoryFigures, errors::FetchError, ports::CategoryProvider};

#[derive(Clone, Debug)]
pub struct YnabClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl YnabClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            http,
        }
    }

    async fn fetch_category(
        &self,
        budget_id: &str,
        category_id: &str,
    ) -> Result<CategoryFigures, FetchError> {
        debug!(budget_id, category_id, "getting category");

        let url = format!(
            "{}/v1/budgets/{}/categories/{}",
            self.base_url, budget_id, category_id
        );

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        if status != 200 {
            let err = map_error_status(status);
            if matches!(err, FetchError::UnexpectedStatus(_)) {
                warn!(budget_id, category_id, status, "unexpected status code");
            } else {
                debug!(budget_id, category_id, status, "category fetch rejected");
            }
            return Err(err);
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let category = decode_category(&body)?;
        debug!(budget_id, category_id, name = %category.name, "got category");

        Ok(category.figures())
    }
}

#[async_trait]
impl CategoryProvider for YnabClient {
    async fn get_category(
        &self,
        budget_id: &str,
        category_id: &str,
    ) -> Result<CategoryFigures, FetchError> {
        self.fetch_category(budget_id, category_id).await
    }
}

fn map_error_status(status: u16) -> FetchError {
    match status {
        404 => FetchError::NotFound,
        401 => FetchError::Unauthorized,
        403 => FetchError::Forbidden,
        other => FetchError::UnexpectedStatus(other),
    }
}

fn decode_category(body: &str) -> Result<WireCategory, FetchError> {
    let resp: CategoryResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(resp.data.category)
}

#[derive(Debug, Deserialize)]
struct CategoryResponse {
    data: CategoryData,
}

#[derive(Debug, Deserialize)]
struct CategoryData {
    category: WireCategory,
}

/// Category object as returned by the API.
///
/// `balance` is absent in older schema variants; treat missing as 0.
#[derive(Debug, Deserialize)]
struct WireCategory {
    #[allow(dead_code)]
    id: String,
    name: String,
    budgeted: i64,
    activity: i64,
    #[serde(default)]
    balance: i64,
}

impl WireCategory {
    fn figures(&self) -> CategoryFigures {
        CategoryFigures {
            budgeted: self.budgeted,
            activity: self.activity,
            balance: self.balance,
        }
    }
}
