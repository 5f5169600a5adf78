//! Technician rotation: trip history aggregation and dispatch prioritization.
//!
//! Everything below `service` is pure and synchronous. Callers supply the
//! reference date explicitly so results never depend on the system clock.

pub mod availability;
pub mod dates;
pub mod domain;
pub mod history;
pub mod processor;
pub mod repository;
pub mod router;
mod sample;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Availability, MatchMode, ProcessedTechnician, Requirement, Technician, TechnicianStatus, Trip,
    TripRecency, NEVER_TRAVELED_LABEL,
};
pub use processor::{process, DisplayFormatError, TechnicianProcessor, DEFAULT_DISPLAY_FORMAT};
pub use repository::{InMemoryRoster, RosterSource, SourceError};
pub use router::roster_router;
pub use scoring::{
    PriorityScore, PriorityScorer, ScoreComponent, ScoreFactor, ScoredTechnician, ScoringWeights,
    DEFAULT_SHORTLIST_SIZE,
};
pub use service::{RosterService, RosterServiceError};
