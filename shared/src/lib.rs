//! Shared types and models for the Herb Trace Platform
//!
//! This crate contains the record shapes, status enums and the pure
//! dashboard logic (filtering, badges, permission checks) shared between
//! the backend and the browser dashboard (via WASM).

pub mod badge;
pub mod filter;
pub mod models;
pub mod types;
pub mod validation;

pub use badge::*;
pub use filter::*;
pub use models::*;
pub use types::*;
pub use validation::*;
