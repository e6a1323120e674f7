//! Request handlers, one submodule per resource.
//!
//! CRUD handlers delegate to the matching repository in `bulltrade_db`
//! and map errors via [`crate::error::AppError`]. The applications
//! module additionally owns the public submission pipeline.

pub mod advantages;
pub mod applications;
pub mod auth;
pub mod content;
pub mod stats;
pub mod team;
