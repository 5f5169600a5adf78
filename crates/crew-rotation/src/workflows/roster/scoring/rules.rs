use super::super::domain::{ProcessedTechnician, Requirement, TripRecency};
use super::weights::ScoringWeights;
use super::{ScoreComponent, ScoreFactor};

pub(crate) fn score_components(
    technician: &ProcessedTechnician,
    requirement: &Requirement,
    weights: &ScoringWeights,
) -> (Vec<ScoreComponent>, f64, bool) {
    let mut components = Vec::new();
    let mut points = 0.0;

    let never_traveled = match technician.days_since_last_trip {
        TripRecency::Days(days) => {
            let recency = days as f64 * weights.recency_per_day;
            components.push(ScoreComponent {
                factor: ScoreFactor::Recency,
                points: recency,
                notes: format!("{days} day(s) since last trip"),
            });
            points += recency;
            false
        }
        TripRecency::NeverTraveled => {
            components.push(ScoreComponent {
                factor: ScoreFactor::Recency,
                points: 0.0,
                notes: "never traveled; ranks above any trip history".to_string(),
            });
            true
        }
    };

    if let Some(profile) = requirement.profile() {
        if technician.technician.profile == profile {
            components.push(ScoreComponent {
                factor: ScoreFactor::ProfileMatch,
                points: weights.profile_match,
                notes: format!("profile matches {profile}"),
            });
            points += weights.profile_match;
        }
    }

    if let Some(specialty) = requirement.specialty() {
        if technician.technician.specialty == specialty {
            components.push(ScoreComponent {
                factor: ScoreFactor::SpecialtyMatch,
                points: weights.specialty_match,
                notes: format!("specialty matches {specialty}"),
            });
            points += weights.specialty_match;
        }
    }

    if technician.trips_this_year > 0 {
        let penalty = f64::from(technician.trips_this_year) * weights.trip_penalty;
        components.push(ScoreComponent {
            factor: ScoreFactor::TripLoad,
            points: -penalty,
            notes: format!("{} trip(s) this year", technician.trips_this_year),
        });
        points -= penalty;
    }

    (components, points, never_traveled)
}

/// Hard filter: every field the requirement names must match exactly.
pub(crate) fn matches_requirement(
    technician: &ProcessedTechnician,
    requirement: &Requirement,
) -> bool {
    let profile_ok = requirement
        .profile()
        .map(|profile| technician.technician.profile == profile)
        .unwrap_or(true);
    let specialty_ok = requirement
        .specialty()
        .map(|specialty| technician.technician.specialty == specialty)
        .unwrap_or(true);
    profile_ok && specialty_ok
}
