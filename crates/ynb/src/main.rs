use std::sync::Arc;

use ynb_core::{
    config::Config,
    report::{ReportService, StatisticMessageFormatter},
};
use ynb_ynab::YnabClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ynb_core::logging::init("ynb")?;

    let cfg = Arc::new(Config::load()?);

    let client = Arc::new(YnabClient::new(
        cfg.ynab_base_url.clone(),
        cfg.ynab_access_token.clone(),
        cfg.ynab_timeout,
    ));

    let service = ReportService::new(
        client,
        cfg.ynab_budget_id.clone(),
        cfg.ynab_category_id.clone(),
        StatisticMessageFormatter::new(),
    );

    ynb_telegram::router::run_polling(cfg, service).await
}
