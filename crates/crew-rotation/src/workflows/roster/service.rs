use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::domain::{MatchMode, ProcessedTechnician, Requirement};
use super::processor::TechnicianProcessor;
use super::repository::{RosterSource, SourceError};
use super::scoring::{PriorityScorer, ScoredTechnician};

/// Service composing a roster source with the processor and the scorer.
pub struct RosterService<S> {
    source: Arc<S>,
    processor: TechnicianProcessor,
    scorer: PriorityScorer,
}

impl<S> RosterService<S>
where
    S: RosterSource + 'static,
{
    pub fn new(source: Arc<S>, processor: TechnicianProcessor, scorer: PriorityScorer) -> Self {
        Self {
            source,
            processor,
            scorer,
        }
    }

    pub fn scorer(&self) -> &PriorityScorer {
        &self.scorer
    }

    /// Enriched roster as of `today`.
    pub fn processed(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<ProcessedTechnician>, RosterServiceError> {
        let technicians = self.source.technicians()?;
        let trips = self.source.trips()?;
        let processed = self.processor.process(&technicians, &trips, today);
        debug!(
            %today,
            technicians = technicians.len(),
            trips = trips.len(),
            "processed roster"
        );
        Ok(processed)
    }

    /// Shortlist for the next dispatch; profile/specialty act as bonuses.
    pub fn suggest(
        &self,
        requirement: &Requirement,
        today: NaiveDate,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredTechnician>, RosterServiceError> {
        let processed = self.processed(today)?;
        let limit = limit.unwrap_or(self.scorer.shortlist_size());
        let ranked = self
            .scorer
            .rank(&processed, requirement, MatchMode::Bonus, Some(limit));
        info!(
            %today,
            profile = requirement.profile().unwrap_or("any"),
            specialty = requirement.specialty().unwrap_or("any"),
            suggested = ranked.len(),
            "generated dispatch suggestions"
        );
        Ok(ranked)
    }

    /// Technicians that satisfy the requirement exactly.
    pub fn eligible(
        &self,
        requirement: &Requirement,
        today: NaiveDate,
    ) -> Result<Vec<ScoredTechnician>, RosterServiceError> {
        let processed = self.processed(today)?;
        let ranked = self.scorer.eligible(&processed, requirement);
        info!(
            %today,
            profile = requirement.profile().unwrap_or("any"),
            specialty = requirement.specialty().unwrap_or("any"),
            eligible = ranked.len(),
            "listed eligible technicians"
        );
        Ok(ranked)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RosterServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
}
