use async_trait::async_trait;

use crate::{budget::CategoryFigures, domain::ChatId, errors::FetchError, Result};

/// Hexagonal port for the budgeting API.
///
/// YNAB is the first implementation; errors come from the closed
/// [`FetchError`] taxonomy so callers can handle them exhaustively.
#[async_trait]
pub trait CategoryProvider: Send + Sync {
    async fn get_category(
        &self,
        budget_id: &str,
        category_id: &str,
    ) -> std::result::Result<CategoryFigures, FetchError>;
}

/// Hexagonal port for messaging.
///
/// Telegram is the first implementation; the bot only ever sends plain text.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
