use crate::demo::{run_demo, run_roster_report, run_roster_suggest, DemoArgs};
use crate::demo::{RosterReportArgs, RosterSuggestArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use crew_rotation::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Crew Rotation",
    about = "Rank field technicians for the next dispatch from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect a technician roster and its trip history
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    /// Walk through the built-in sample roster end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Print every technician with availability and trip statistics
    Report(RosterReportArgs),
    /// Rank available technicians for a dispatch requirement
    Suggest(RosterSuggestArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roster {
            command: RosterCommand::Report(args),
        } => run_roster_report(args),
        Command::Roster {
            command: RosterCommand::Suggest(args),
        } => run_roster_suggest(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn suggest_parses_requirement_and_date() {
        let cli = Cli::try_parse_from([
            "crew-rotation",
            "roster",
            "suggest",
            "--profile",
            "Senior",
            "--today",
            "2025-06-04",
            "--strict",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Roster {
                command: RosterCommand::Suggest(args),
            }) => {
                assert_eq!(args.profile.as_deref(), Some("Senior"));
                assert!(args.strict);
                assert_eq!(
                    args.today,
                    chrono::NaiveDate::from_ymd_opt(2025, 6, 4)
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_calendar_invalid_today() {
        let result = Cli::try_parse_from([
            "crew-rotation",
            "roster",
            "report",
            "--today",
            "2025-02-30",
        ]);
        assert!(result.is_err());
    }
}
