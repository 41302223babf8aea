// In-memory catalog: the single owned store for jobs, resumes, skills, users
// and applications. Every public operation waits out a simulated backend
// latency first, then takes the lock once.

pub mod fixtures;
pub mod handlers;
pub mod latency;
pub mod store;
pub mod validation;

pub use store::{Catalog, CatalogStore};
