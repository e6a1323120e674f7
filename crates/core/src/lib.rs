//! Domain logic for the BULL Trading recruiting site.
//!
//! Pure types and functions only: no I/O, no async. The HTTP and
//! storage layers live in `bulltrade-api` and `bulltrade-db`.

pub mod application;
pub mod error;
pub mod types;
pub mod validation;
