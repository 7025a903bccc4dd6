//! HTTP handlers for the Herb Trace Platform API

pub mod access;
pub mod application;
pub mod certification;
pub mod health;
pub mod traceability;
pub mod transaction;

pub use access::*;
pub use application::*;
pub use certification::*;
pub use health::*;
pub use traceability::*;
pub use transaction::*;

use std::str::FromStr;

use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Parse an optional query parameter, rejecting unknown values
fn parse_param<T: FromStr>(field: &str, raw: Option<&str>) -> AppResult<Option<T>> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| AppError::invalid_parameter(field, value)),
    }
}

/// Parse a record ID taken from the path
fn parse_id(field: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::invalid_parameter(field, raw))
}
