//! One repository per entity. Repositories are stateless unit structs
//! whose associated functions take `&PgPool` and speak raw sqlx.

mod advantage_repo;
mod application_repo;
mod content_repo;
mod stat_repo;
mod team_repo;

pub use advantage_repo::AdvantageRepo;
pub use application_repo::ApplicationRepo;
pub use content_repo::ContentRepo;
pub use stat_repo::StatRepo;
pub use team_repo::TeamRepo;
