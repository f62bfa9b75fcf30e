//! Telegram update handlers.
//!
//! One message handler: gate on the chat allowlist, answer `/start` and
//! `/state` with the category statistic, ignore everything else.

use std::sync::Arc;

use chrono::Utc;
use teloxide::prelude::*;
use tracing::{error, info, warn};

use ynb_core::{domain::ChatId, errors::FetchError, Error};

use crate::router::AppState;

const NOT_ALLOWED_TEXT: &str = "You are not allowed to use this bot";
const UNEXPECTED_ERROR_TEXT: &str = "Unexpected error occurred. You know whom to call";

pub async fn handle_message(
    _bot: Bot,
    msg: Message,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);

    if !state.allowed_chats.contains(chat_id) {
        warn!(chat_id = chat_id.0, "chat is not allowed");
        send_with_error_logging(&state, chat_id, NOT_ALLOWED_TEXT).await;
        return Ok(());
    }

    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(command) = command_name(text) else {
        return Ok(());
    };
    if command != "start" && command != "state" {
        return Ok(());
    }

    info!(chat_id = chat_id.0, command, "state handler");

    let as_of = Utc::now().date_naive();
    let reply = match state.service.build_report(as_of).await {
        Ok(report) => report,
        Err(e) => {
            log_report_error(chat_id, &e);
            UNEXPECTED_ERROR_TEXT.to_string()
        }
    };

    send_with_error_logging(&state, chat_id, &reply).await;
    Ok(())
}

/// Extract the command name from a message: `"/state@my_bot now"` → `"state"`.
fn command_name(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    let cmd = first.strip_prefix('/')?;
    let cmd = cmd.split('@').next().unwrap_or(cmd);
    if cmd.is_empty() {
        None
    } else {
        Some(cmd)
    }
}

fn log_report_error(chat_id: ChatId, err: &Error) {
    match err {
        Error::Fetch(FetchError::NotFound) => {
            warn!(chat_id = chat_id.0, "category not found")
        }
        Error::Fetch(fetch @ (FetchError::Unauthorized | FetchError::Forbidden)) => {
            error!(chat_id = chat_id.0, error = %fetch, "ynab access rejected")
        }
        Error::Fetch(fetch) => {
            error!(chat_id = chat_id.0, error = %fetch, "failed to get category")
        }
        other => {
            error!(chat_id = chat_id.0, error = %other, "failed to build statistic report")
        }
    }
}

async fn send_with_error_logging(state: &AppState, chat_id: ChatId, text: &str) {
    if let Err(e) = state.messenger.send_text(chat_id, text).await {
        error!(chat_id = chat_id.0, error = %e, "failed to send message");
    }
}
