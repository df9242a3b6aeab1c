use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::core::models::ItemId;
use crate::core::types::{Interval, Weekday};

/// Domain-specific error set for catalog loading and scheduling runs.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Scheduling core ----------------------------------------------------
    /// A time value could not be read. Aborts the run.
    #[error("Invalid time format: '{0}'. Expected HH:MM or H:MM AM/PM.")]
    InvalidFormat(String),

    /// A commit landed on an occupied slot. Policies check before they
    /// commit, so seeing this means a policy is broken.
    #[error(
        "Conflict violation: item {owner} cannot book {weekday} {interval}; already held by item {existing}."
    )]
    ConflictViolation {
        weekday: Weekday,
        interval: Interval,
        owner: ItemId,
        existing: ItemId,
    },

    // ---- Input text ---------------------------------------------------------
    /// CLI arguments, catalog fields, weekday/bool names.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Config -------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn invalid_format<S: Into<String>>(value: S) -> Self {
        Error::InvalidFormat(value.into())
    }
}

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
