use std::collections::HashSet;

use crate::domain::ChatId;

/// Immutable chat allowlist, built once at startup and queried without
/// locking.
#[derive(Clone, Debug)]
pub struct AllowedChats {
    inner: HashSet<ChatId>,
}

impl AllowedChats {
    pub fn new(chat_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            inner: chat_ids.into_iter().map(ChatId).collect(),
        }
    }

    pub fn contains(&self, chat_id: ChatId) -> bool {
        self.inner.contains(&chat_id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
