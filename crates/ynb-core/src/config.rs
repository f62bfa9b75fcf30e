use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

const DEFAULT_YNAB_BASE_URL: &str = "https://api.ynab.com";
const DEFAULT_YNAB_TIMEOUT_MS: u64 = 60_000;

/// Typed configuration, loaded from the environment (with `.env` support).
#[derive(Clone, Debug)]
pub struct Config {
    // Telegram
    pub telegram_token: String,
    pub telegram_chat_ids: Vec<i64>,

    // YNAB
    pub ynab_access_token: String,
    pub ynab_budget_id: String,
    pub ynab_category_id: String,
    pub ynab_base_url: String,
    pub ynab_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_token = require_env("TELEGRAM_TOKEN")?;
        let telegram_chat_ids = parse_csv_i64(&require_env("TELEGRAM_CHAT_IDS")?)?;
        if telegram_chat_ids.is_empty() {
            return Err(Error::Config(
                "TELEGRAM_CHAT_IDS environment variable is empty".to_string(),
            ));
        }

        let ynab_access_token = require_env("YNAB_ACCESS_TOKEN")?;
        let ynab_budget_id = require_env("YNAB_BUDGET_ID")?;
        let ynab_category_id = require_env("YNAB_CATEGORY_ID")?;

        let ynab_base_url = env_str("YNAB_BASE_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_YNAB_BASE_URL.to_string());
        let ynab_timeout =
            Duration::from_millis(env_u64("YNAB_TIMEOUT_MS").unwrap_or(DEFAULT_YNAB_TIMEOUT_MS));

        Ok(Self {
            telegram_token,
            telegram_chat_ids,
            ynab_access_token,
            ynab_budget_id,
            ynab_category_id,
            ynab_base_url,
            ynab_timeout,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    env_str(key).and_then(non_empty).ok_or_else(|| {
        Error::Config(format!("{key} environment variable is required"))
    })
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Parse a comma-separated chat id list. Unlike lenient CSV parsing for
/// tuning knobs, a malformed chat id is a startup error.
fn parse_csv_i64(raw: &str) -> Result<Vec<i64>> {
    let mut out = Vec::new();

    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let val = part
            .parse::<i64>()
            .map_err(|e| Error::Config(format!("failed to parse chat id {part:?}: {e}")))?;
        out.push(val);
    }

    Ok(out)
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}
