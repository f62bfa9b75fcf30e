/// Closed error taxonomy for the category fetch collaborator.
///
/// The YNAB adapter maps HTTP outcomes into these variants so the reply layer
/// can handle them exhaustively.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("category not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),
}

/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the bot core
/// can handle failures consistently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("category fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
