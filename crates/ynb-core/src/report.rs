//! Statistic message rendering and the request-path application service.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    budget::{compute_statistic, Statistic},
    money::format_money,
    ports::CategoryProvider,
    Result,
};

/// Renders a [`Statistic`] into the reply text.
///
/// Built once at startup and owned by the request path; construction is
/// infallible and the value is immutable after that.
#[derive(Clone, Debug)]
pub struct StatisticMessageFormatter {
    currency: String,
}

impl StatisticMessageFormatter {
    /// Default layout with the original hryvnia label.
    pub fn new() -> Self {
        Self::with_currency("грн.")
    }

    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn render(&self, stat: &Statistic) -> String {
        // The uneven padding lines the values up in Telegram's proportional
        // font; kept as-is.
        format!(
            "Залишок:                               {balance} {cur}\n\
             Середньо витрачається:    {avg_spent} {cur} в день\n\
             \n\
             Середньо залишилося:       {avg_spent_left} {cur} в день\n",
            balance = format_money(stat.balance),
            avg_spent = format_money(stat.avg_spent),
            avg_spent_left = format_money(stat.avg_spent_left),
            cur = self.currency,
        )
    }
}

impl Default for StatisticMessageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Application service for the single thing this bot does: fetch one
/// category, derive its statistic, render the reply.
pub struct ReportService {
    provider: Arc<dyn CategoryProvider>,
    budget_id: String,
    category_id: String,
    formatter: StatisticMessageFormatter,
}

impl ReportService {
    pub fn new(
        provider: Arc<dyn CategoryProvider>,
        budget_id: impl Into<String>,
        category_id: impl Into<String>,
        formatter: StatisticMessageFormatter,
    ) -> Self {
        Self {
            provider,
            budget_id: budget_id.into(),
            category_id: category_id.into(),
            formatter,
        }
    }

    /// Fetch the configured category and build the statistic reply as of
    /// `as_of`. The date is taken once per request so one computation sees
    /// one date.
    pub async fn build_report(&self, as_of: NaiveDate) -> Result<String> {
        let figures = self
            .provider
            .get_category(&self.budget_id, &self.category_id)
            .await?;

        let stat = compute_statistic(figures, as_of);
        debug!(
            budget_id = %self.budget_id,
            category_id = %self.category_id,
            avg_spent = stat.avg_spent,
            avg_spent_left = stat.avg_spent_left,
            days_left = stat.days_left,
            "computed statistic"
        );

        Ok(self.formatter.render(&stat))
    }
}
