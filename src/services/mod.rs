//! Service layer for the studio dashboard.
//!
//! - Records (HTTP client for the hosted record store)
//! - Dashboard (snapshot of all collections and the refresh routine)
//! - Resolver (course/instructor/participant cross-references)
//! - Ordering (display order of each collection)

mod dashboard;
pub mod ordering;
mod records;
mod resolver;

pub use dashboard::{DashboardService, Snapshot};
pub use records::RecordClient;
pub use resolver::CrossReferences;
