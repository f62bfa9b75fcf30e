//! Core domain + application logic for the YNAB notifier bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the YNAB API
//! live behind ports (traits) implemented in adapter crates.

pub mod budget;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod money;
pub mod ports;
pub mod report;
pub mod security;

pub use errors::{Error, FetchError, Result};
