//! Request middleware

pub mod auth;

pub use auth::{auth_middleware, encode_viewer_token, Viewer};
