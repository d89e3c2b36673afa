use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use front_desk::core::load_snapshot;
use front_desk::utils::time::{parse_date, parse_month};
use front_desk::{HotelStore, setup_environment};

/// Hotel front desk reports over a JSON snapshot
#[derive(Debug, Parser)]
#[command(name = "front-desk", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Monthly check-ins, check-outs, revenue and peak occupancy
    Report {
        snapshot: PathBuf,
        /// YYYY-MM
        month: String,
        hotel_id: Option<String>,
    },
    /// Booking list as CSV on stdout
    Export { snapshot: PathBuf },
    /// Arrivals, departures and in-house guests for one day
    Day {
        snapshot: PathBuf,
        /// YYYY-MM-DD
        date: String,
        hotel_id: Option<String>,
    },
}

fn open_store(path: &Path, config: front_desk::Config) -> anyhow::Result<HotelStore> {
    let snapshot = load_snapshot(path)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;
    Ok(HotelStore::from_snapshot(config, snapshot)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = setup_environment();

    tracing::info!(environment = %config.environment, "front-desk starting");

    match cli.command {
        Command::Report {
            snapshot,
            month,
            hotel_id,
        } => {
            let range = parse_month(&month)?;
            let store = open_store(&snapshot, config)?;
            let report = store.monthly_report(hotel_id.as_deref(), &range);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Export { snapshot } => {
            let store = open_store(&snapshot, config)?;
            print!("{}", store.export_csv());
        }
        Command::Day {
            snapshot,
            date,
            hotel_id,
        } => {
            let date = parse_date(&date)?;
            let store = open_store(&snapshot, config)?;
            let sheet = store.day_sheet(hotel_id.as_deref(), date);
            println!("{date}");
            println!(
                "  check-ins (from {}):  {}",
                sheet.check_in_from.format("%H:%M"),
                sheet.arrivals.join(" ")
            );
            println!(
                "  check-outs (by {}):   {}",
                sheet.check_out_by.format("%H:%M"),
                sheet.departures.join(" ")
            );
            println!("  staying:    {}", sheet.in_house.join(" "));
            println!("  rooms occupied: {}", sheet.rooms_occupied);
        }
    }

    Ok(())
}
