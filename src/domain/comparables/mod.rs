//! Comparable Company Engine: external estimation wrapped in a TTL cache.

mod engine;
mod profile;
mod result;

pub use engine::ComparableEngine;
pub use profile::CompanyProfile;
pub use result::{ComparableCompany, ComparableResult};
