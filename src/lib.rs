//! ExitPath - Valuation and buyer-readiness scoring engine.
//!
//! Turns assessment answers and financial statements into a versioned
//! business valuation (current value, potential value, value gap) and a
//! composite Buyer Readiness Index, as one deterministic, auditable
//! pipeline: category scoring → EBITDA normalization → cached comparable
//! lookup → risk adjustment → valuation → immutable snapshot.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
