//! Shared domain primitives: identifiers, scores, timestamps, errors.

mod errors;
mod ids;
mod score;
mod timestamp;

pub use errors::{EngineError, ValidationError};
pub use ids::{ActorId, CompanyId, SnapshotId};
pub use score::{MultipleRange, Score};
pub use timestamp::Timestamp;
