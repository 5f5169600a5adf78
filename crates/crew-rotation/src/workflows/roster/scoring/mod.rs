mod rules;
mod weights;

pub use weights::{ScoringWeights, DEFAULT_SHORTLIST_SIZE};

use super::domain::{MatchMode, ProcessedTechnician, Requirement};
use rules::{matches_requirement, score_components};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Recency,
    ProfileMatch,
    SpecialtyMatch,
    TripLoad,
}

/// Single contribution to a priority score, kept for display and audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}

/// Suitability of a technician for the next dispatch.
///
/// A technician who never traveled outranks every technician with a trip
/// history; `points` then only orders technicians within the same group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityScore {
    pub never_traveled: bool,
    pub points: f64,
    pub components: Vec<ScoreComponent>,
}

impl PriorityScore {
    /// `Greater` means `self` should be dispatched before `other`.
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        self.never_traveled
            .cmp(&other.never_traveled)
            .then_with(|| self.points.total_cmp(&other.points))
    }
}

impl fmt::Display for PriorityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.never_traveled {
            write!(f, "never traveled ({:+.1})", self.points)
        } else {
            write!(f, "{:.1}", self.points)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTechnician {
    #[serde(flatten)]
    pub technician: ProcessedTechnician,
    pub score: PriorityScore,
}

/// Ranks processed technicians against a dispatch requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityScorer {
    weights: ScoringWeights,
    shortlist_size: usize,
}

impl Default for PriorityScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_SHORTLIST_SIZE)
    }
}

impl PriorityScorer {
    pub fn new(weights: ScoringWeights, shortlist_size: usize) -> Self {
        Self {
            weights,
            shortlist_size,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn shortlist_size(&self) -> usize {
        self.shortlist_size
    }

    pub fn score(
        &self,
        technician: &ProcessedTechnician,
        requirement: &Requirement,
    ) -> PriorityScore {
        let (components, points, never_traveled) =
            score_components(technician, requirement, &self.weights);
        PriorityScore {
            never_traveled,
            points,
            components,
        }
    }

    /// Available technicians sorted by descending score, ties by ascending id.
    pub fn rank(
        &self,
        technicians: &[ProcessedTechnician],
        requirement: &Requirement,
        mode: MatchMode,
        limit: Option<usize>,
    ) -> Vec<ScoredTechnician> {
        let mut ranked: Vec<ScoredTechnician> = technicians
            .iter()
            .filter(|technician| technician.is_available())
            .filter(|technician| match mode {
                MatchMode::Bonus => true,
                MatchMode::Filter => matches_requirement(technician, requirement),
            })
            .map(|technician| ScoredTechnician {
                score: self.score(technician, requirement),
                technician: technician.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .priority_cmp(&a.score)
                .then_with(|| a.technician.id().cmp(b.technician.id()))
        });

        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Top candidates where profile/specialty only add bonus points.
    pub fn suggest(
        &self,
        technicians: &[ProcessedTechnician],
        requirement: &Requirement,
    ) -> Vec<ScoredTechnician> {
        self.rank(
            technicians,
            requirement,
            MatchMode::Bonus,
            Some(self.shortlist_size),
        )
    }

    /// Every available technician matching the requirement exactly, ranked.
    pub fn eligible(
        &self,
        technicians: &[ProcessedTechnician],
        requirement: &Requirement,
    ) -> Vec<ScoredTechnician> {
        self.rank(technicians, requirement, MatchMode::Filter, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::roster::domain::{
        Availability, Technician, TechnicianStatus, TripRecency,
    };

    fn processed(
        id: &str,
        profile: &str,
        specialty: &str,
        days: TripRecency,
        trips_this_year: u32,
    ) -> ProcessedTechnician {
        ProcessedTechnician {
            technician: Technician {
                id: id.to_string(),
                name: id.to_uppercase(),
                profile: profile.to_string(),
                specialty: specialty.to_string(),
                home_base: "Itajaí".to_string(),
                original_status: TechnicianStatus::Active,
            },
            availability: Availability::Available,
            days_since_last_trip: days,
            trips_this_year,
            last_trip_date: None,
            last_trip_date_formatted: String::new(),
        }
    }

    fn senior() -> Requirement {
        Requirement::new(Some("Senior".to_string()), None)
    }

    #[test]
    fn score_combines_recency_match_and_load() {
        let scorer = PriorityScorer::default();
        let a = processed("a", "Senior", "Hydraulics", TripRecency::Days(30), 2);
        let b = processed("b", "Senior", "Hydraulics", TripRecency::Days(10), 0);

        assert_eq!(scorer.score(&a, &senior()).points, 144.0);
        assert_eq!(scorer.score(&b, &senior()).points, 115.0);

        let ranked = scorer.suggest(&[b, a], &senior());
        assert_eq!(ranked[0].technician.id(), "a");
        assert_eq!(ranked[1].technician.id(), "b");
    }

    #[test]
    fn specialty_bonus_applies_independently() {
        let scorer = PriorityScorer::default();
        let tech = processed("a", "Mid", "Hydraulics", TripRecency::Days(4), 1);
        let requirement = Requirement::new(Some("Senior".to_string()), Some("Hydraulics".into()));
        let score = scorer.score(&tech, &requirement);
        assert_eq!(score.points, 4.0 * 1.5 + 75.0 - 0.5);
        assert!(score
            .components
            .iter()
            .any(|component| component.factor == ScoreFactor::SpecialtyMatch));
        assert!(!score
            .components
            .iter()
            .any(|component| component.factor == ScoreFactor::ProfileMatch));
    }

    #[test]
    fn blank_requirement_fields_award_nothing() {
        let scorer = PriorityScorer::default();
        let tech = processed("a", "", "", TripRecency::Days(2), 0);
        let requirement = Requirement::new(Some("  ".to_string()), Some(String::new()));
        assert_eq!(scorer.score(&tech, &requirement).points, 3.0);
    }

    #[test]
    fn never_traveled_outranks_any_finite_recency() {
        let scorer = PriorityScorer::default();
        let veteran = processed("a", "Senior", "Civil", TripRecency::Days(100_000), 0);
        let rookie = processed("b", "Senior", "Civil", TripRecency::NeverTraveled, 0);
        let ranked = scorer.rank(&[veteran, rookie], &senior(), MatchMode::Bonus, None);
        assert_eq!(ranked[0].technician.id(), "b");
        assert!(ranked[0].score.never_traveled);
    }

    #[test]
    fn ties_break_on_technician_id() {
        let scorer = PriorityScorer::default();
        let z = processed("z", "Senior", "Civil", TripRecency::Days(5), 1);
        let m = processed("m", "Senior", "Civil", TripRecency::Days(5), 1);
        let ranked = scorer.rank(&[z, m], &Requirement::default(), MatchMode::Bonus, None);
        let ids: Vec<_> = ranked.iter().map(|scored| scored.technician.id()).collect();
        assert_eq!(ids, ["m", "z"]);
    }

    #[test]
    fn filter_mode_drops_mismatches_while_bonus_keeps_them() {
        let scorer = PriorityScorer::default();
        let technicians = vec![
            processed("a", "Senior", "Civil", TripRecency::Days(1), 0),
            processed("b", "Junior", "Civil", TripRecency::Days(10), 0),
        ];

        let eligible = scorer.eligible(&technicians, &senior());
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].technician.id(), "a");

        let suggested = scorer.suggest(&technicians, &senior());
        assert_eq!(suggested.len(), 2);
        assert_eq!(suggested[0].technician.id(), "a");
    }

    #[test]
    fn unavailable_technicians_are_excluded_and_shortlist_is_capped() {
        let scorer = PriorityScorer::new(ScoringWeights::default(), 2);
        let mut on_leave = processed("x", "Senior", "Civil", TripRecency::NeverTraveled, 0);
        on_leave.availability = Availability::Unavailable;
        let technicians = vec![
            on_leave,
            processed("a", "Senior", "Civil", TripRecency::Days(1), 0),
            processed("b", "Senior", "Civil", TripRecency::Days(2), 0),
            processed("c", "Senior", "Civil", TripRecency::Days(3), 0),
        ];
        let ranked = scorer.suggest(&technicians, &Requirement::default());
        let ids: Vec<_> = ranked.iter().map(|scored| scored.technician.id()).collect();
        assert_eq!(ids, ["c", "b"]);
    }

    #[test]
    fn display_marks_never_traveled_scores() {
        let scorer = PriorityScorer::default();
        let rookie = processed("b", "Senior", "Civil", TripRecency::NeverTraveled, 0);
        assert_eq!(
            scorer.score(&rookie, &senior()).to_string(),
            "never traveled (+100.0)"
        );
    }
}
