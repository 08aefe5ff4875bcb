use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::debug;
use crate::team_table::TeamTable;

mod csv_handler;
mod error;
mod team_table;

/// Replace team names with abbreviations in a CSV file.
#[derive(Debug, Parser)]
#[command(name = "team_abbrev", version, about)]
struct Args {
    /// Input CSV file
    #[arg(default_value = "data.csv")]
    csv_file: PathBuf,

    /// Output CSV file (default: <input>_abbrev.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let table = TeamTable::default();
    debug!("Loaded {} team names", table.len());

    match csv_handler::abbreviate_file(&table, &args.csv_file, args.output.as_deref()) {
        Ok(summary) => {
            debug!("{} rows written, {} names abbreviated", summary.rows, summary.substitutions);
            println!("{}", summary.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
