//! Estimator adapters: HTTP client for the hosted service and a
//! scripted mock for tests.

mod http_estimator;
mod mock_estimator;

pub use http_estimator::{HttpEstimator, HttpEstimatorConfig};
pub use mock_estimator::MockEstimator;
