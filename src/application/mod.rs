//! Application layer: the service external triggers invoke.

mod recalculation;

pub use recalculation::RecalculationService;
