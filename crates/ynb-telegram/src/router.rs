use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use tracing::info;

use ynb_core::{config::Config, ports::MessagingPort, report::ReportService, security::AllowedChats};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub allowed_chats: AllowedChats,
    pub service: Arc<ReportService>,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>, service: ReportService) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_token.clone());

    // Basic startup info.
    if let Ok(me) = bot.get_me().await {
        info!(username = me.username(), "bot started");
    }
    info!(allowed_chats = cfg.telegram_chat_ids.len(), "allowlist loaded");

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let state = Arc::new(AppState {
        allowed_chats: AllowedChats::new(cfg.telegram_chat_ids.iter().copied()),
        service: Arc::new(service),
        messenger,
    });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
