//! Row structs and request DTOs, one submodule per entity.
//!
//! Serialized field names are camelCase to match the site's existing
//! JSON contract (the admin panel and public pages consume them as-is).

pub mod advantage;
pub mod application;
pub mod content;
pub mod stat;
pub mod team_member;
