use crate::infra::{load_roster_from_args, parse_date, today_or_now};
use chrono::NaiveDate;
use clap::Args;
use crew_rotation::config::RosterConfig;
use crew_rotation::error::AppError;
use crew_rotation::telemetry;
use crew_rotation::workflows::roster::{
    InMemoryRoster, MatchMode, ProcessedTechnician, Requirement, RosterService, ScoredTechnician,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RosterReportArgs {
    /// Technician roster CSV (id,name,profile,specialty,home_base,status)
    #[arg(long)]
    pub(crate) technicians: Option<PathBuf>,
    /// Trip log CSV (technician_id,date,client,client_city,shift)
    #[arg(long)]
    pub(crate) trips: Option<PathBuf>,
    /// Reference date for the report (defaults to today, UTC)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct RosterSuggestArgs {
    /// Technician roster CSV (id,name,profile,specialty,home_base,status)
    #[arg(long)]
    pub(crate) technicians: Option<PathBuf>,
    /// Trip log CSV (technician_id,date,client,client_city,shift)
    #[arg(long)]
    pub(crate) trips: Option<PathBuf>,
    /// Required profile, e.g. Senior
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Required specialty, e.g. Electrical
    #[arg(long)]
    pub(crate) specialty: Option<String>,
    /// Maximum number of technicians to list
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Drop technicians that do not match profile/specialty instead of scoring them lower
    #[arg(long)]
    pub(crate) strict: bool,
    /// Reference date (defaults to today, UTC)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for the demo (defaults to today, UTC)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Profile used for the suggestion step
    #[arg(long, default_value = "Senior")]
    pub(crate) profile: String,
    /// Specialty used for the suggestion step
    #[arg(long)]
    pub(crate) specialty: Option<String>,
}

/// Applies the same `ROSTER_*` settings the HTTP service uses.
fn service_for(config: &RosterConfig, roster: InMemoryRoster) -> RosterService<InMemoryRoster> {
    RosterService::new(Arc::new(roster), config.processor(), config.scorer())
}

pub(crate) fn run_roster_report(args: RosterReportArgs) -> Result<(), AppError> {
    telemetry::init_for_cli()?;
    let RosterReportArgs {
        technicians,
        trips,
        today,
    } = args;

    let config = RosterConfig::load()?;
    let today = today_or_now(today);
    let (roster, imported) = load_roster_from_args(technicians, trips)?;
    let processed = service_for(&config, roster).processed(today)?;

    println!("Technician roster");
    print_source(imported, today);
    print!("{}", render_roster(&processed));
    Ok(())
}

pub(crate) fn run_roster_suggest(args: RosterSuggestArgs) -> Result<(), AppError> {
    telemetry::init_for_cli()?;
    let RosterSuggestArgs {
        technicians,
        trips,
        profile,
        specialty,
        limit,
        strict,
        today,
    } = args;

    let config = RosterConfig::load()?;
    let today = today_or_now(today);
    let (roster, imported) = load_roster_from_args(technicians, trips)?;
    let service = service_for(&config, roster);
    let requirement = Requirement::new(profile, specialty);

    let (mode, ranked) = if strict {
        let mut ranked = service.eligible(&requirement, today)?;
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        (MatchMode::Filter, ranked)
    } else {
        (MatchMode::Bonus, service.suggest(&requirement, today, limit)?)
    };

    println!("Dispatch suggestions");
    print_source(imported, today);
    println!("Requirement: {}", describe_requirement(&requirement, mode));
    print!("{}", render_ranking(&ranked));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    telemetry::init_for_cli()?;
    let DemoArgs {
        today,
        profile,
        specialty,
    } = args;

    let config = RosterConfig::load()?;
    let today = today_or_now(today);
    let service = service_for(&config, InMemoryRoster::sample());
    let requirement = Requirement::new(Some(profile), specialty);

    println!("Crew rotation demo");
    print_source(false, today);

    println!("\nRoster");
    print!("{}", render_roster(&service.processed(today)?));

    println!(
        "\nTop suggestions ({})",
        describe_requirement(&requirement, MatchMode::Bonus)
    );
    print!("{}", render_ranking(&service.suggest(&requirement, today, None)?));

    println!(
        "\nEligible technicians ({})",
        describe_requirement(&requirement, MatchMode::Filter)
    );
    print!("{}", render_ranking(&service.eligible(&requirement, today)?));
    Ok(())
}

fn print_source(imported: bool, today: NaiveDate) {
    if imported {
        println!("Data source: CSV import");
    } else {
        println!("Data source: sample roster (no CSV files provided)");
    }
    println!("Reference date: {today}");
}

fn describe_requirement(requirement: &Requirement, mode: MatchMode) -> String {
    let profile = requirement.profile().unwrap_or("any profile");
    let specialty = requirement.specialty().unwrap_or("any specialty");
    let mode = match mode {
        MatchMode::Bonus => "matches add bonus points",
        MatchMode::Filter => "exact matches only",
    };
    format!("{profile} / {specialty}, {mode}")
}

pub(crate) fn render_roster(processed: &[ProcessedTechnician]) -> String {
    if processed.is_empty() {
        return "- no technicians\n".to_string();
    }

    processed
        .iter()
        .map(|tech| {
            format!(
                "- {} {} ({} / {}) | {} | last trip {} | {} | {} trip(s) this year\n",
                tech.technician.id,
                tech.technician.name,
                tech.technician.profile,
                tech.technician.specialty,
                tech.availability.label(),
                tech.last_trip_date_formatted,
                tech.days_since_last_trip,
                tech.trips_this_year
            )
        })
        .collect()
}

pub(crate) fn render_ranking(ranked: &[ScoredTechnician]) -> String {
    if ranked.is_empty() {
        return "- no available technicians\n".to_string();
    }

    ranked
        .iter()
        .enumerate()
        .map(|(position, scored)| {
            let tech = &scored.technician;
            format!(
                "{}. {} {} ({} / {}) | score {} | last trip {} | {} trip(s) this year\n",
                position + 1,
                tech.technician.id,
                tech.technician.name,
                tech.technician.profile,
                tech.technician.specialty,
                scored.score,
                tech.last_trip_date_formatted,
                tech.trips_this_year
            )
        })
        .collect()
}
