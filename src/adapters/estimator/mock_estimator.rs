//! Mock estimator for testing.
//!
//! Scripted responses consumed in order, error injection, and call
//! tracking so tests can prove cache idempotence without a real service.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::comparables::{CompanyProfile, ComparableResult};
use crate::ports::{ComparableEstimator, EstimatorError};

/// Scripted estimator: queue of outcomes consumed per call.
///
/// When the queue runs dry the last configured outcome repeats, so a
/// single `with_result` covers an arbitrary number of calls.
#[derive(Default)]
pub struct MockEstimator {
    script: Mutex<VecDeque<Result<ComparableResult, EstimatorError>>>,
    last: Mutex<Option<Result<ComparableResult, EstimatorError>>>,
    calls: AtomicUsize,
}

impl MockEstimator {
    /// Creates an empty mock; calling it unscripted returns unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful result.
    pub fn with_result(self, result: ComparableResult) -> Self {
        self.script.lock().unwrap().push_back(Ok(result));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: EstimatorError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of external calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ComparableEstimator for MockEstimator {
    async fn estimate(&self, _profile: &CompanyProfile) -> Result<ComparableResult, EstimatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(outcome) => {
                *self.last.lock().unwrap() = Some(clone_outcome(&outcome));
                outcome
            }
            None => match &*self.last.lock().unwrap() {
                Some(outcome) => clone_outcome(outcome),
                None => Err(EstimatorError::unavailable("mock estimator unscripted")),
            },
        }
    }
}

fn clone_outcome(
    outcome: &Result<ComparableResult, EstimatorError>,
) -> Result<ComparableResult, EstimatorError> {
    match outcome {
        Ok(result) => Ok(result.clone()),
        Err(error) => Err(error.clone()),
    }
}
