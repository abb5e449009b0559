use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use colored::Colorize;
use std::path::Path;
use std::process;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use lineup_core::{pipeline, territory, Error, RunReport, TerritoryCode};

/// Lineup - channel lineup matrix across territories
///
/// Parses one channel-listing export per territory and writes a table of
/// which territories carry each channel.
#[derive(Parser)]
#[command(name = "lineup-cli", version, about, long_about = None)]
struct Cli {
    /// Territory exports as TERRITORY=PATH, then the output table (.csv, .tsv or .xlsx)
    #[arg(value_name = "TERRITORY=PATH... OUTPUT", required = true, num_args = 2..)]
    args: Vec<String>,

    /// Print the run report as JSON instead of the confirmation line
    #[arg(long)]
    json: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log progress to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

const EXIT_OK: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_FAILURE: i32 = 2;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
                _ => EXIT_USAGE,
            };
            process::exit(code);
        }
    };

    init_logging(&cli);
    process::exit(run(&cli));
}

fn init_logging(cli: &Cli) {
    let default = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "error",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> i32 {
    // clap guarantees at least one input and the output
    let (input_args, output) = cli.args.split_at(cli.args.len() - 1);
    let output = Path::new(&output[0]);
    debug!(inputs = input_args.len(), output = %output.display(), "starting run");

    let result = territory::parse_inputs(input_args).and_then(|inputs| pipeline::run(&inputs, output));

    match result {
        Ok(report) => print_report(cli, &report),
        Err(e) if e.is_usage() => {
            print_error(&e);
            if matches!(e, Error::UnknownTerritory(_)) {
                let codes: Vec<&str> = TerritoryCode::ALL.iter().map(|t| t.as_str()).collect();
                eprintln!("  supported territories: {}", codes.join(", "));
            }
            eprintln!("{}", Cli::command().render_usage());
            EXIT_USAGE
        }
        Err(e) => {
            print_error(&e);
            EXIT_FAILURE
        }
    }
}

/// Print skip warnings and the confirmation or JSON report; returns the exit code.
///
/// The table is already written when this runs, but a report that cannot
/// be rendered still fails the run.
fn print_report(cli: &Cli, report: &RunReport) -> i32 {
    if !cli.quiet {
        for skipped in &report.skipped {
            eprintln!(
                "{} skipped {}: {}",
                "warning:".yellow().bold(),
                skipped.territory,
                skipped.reason
            );
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} cannot render report: {}", "error:".red().bold(), e);
                return EXIT_FAILURE;
            }
        }
    } else if !cli.quiet {
        println!("Table written to {}", report.output.display());
    }
    EXIT_OK
}

fn print_error(e: &Error) {
    eprintln!("{} {}", "error:".red().bold(), e);
}
