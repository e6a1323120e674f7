//! Request extractors and per-IP rate limiting.

pub mod auth;
pub mod client_meta;
pub mod rate_limit;
