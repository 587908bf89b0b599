// Surgery Calendar
// Headless driver: prints the visible week and replays drag gestures

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

use surgery_calendar::models::settings::Settings;
use surgery_calendar::services::settings::SettingsService;
use surgery_calendar::utils::format::{format_day_header, format_time_range};
use surgery_calendar::{CellAddress, EventId, Scheduler};

#[derive(Parser)]
#[command(name = "surgery-calendar")]
#[command(about = "Weekly 15-minute slot grid with drag-to-reschedule")]
struct Cli {
    /// Settings file (defaults to settings.toml in the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Date the visible week is computed from (defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the visible week with its events
    Week,
    /// Drag an event onto the cell at DATE TIME and print the week
    Move {
        /// Event id
        id: EventId,
        /// Target day (YYYY-MM-DD)
        date: NaiveDate,
        /// Target time on the 15-minute grid (HH:MM)
        #[arg(value_parser = parse_time)]
        time: NaiveTime,
    },
    /// Write the default settings file
    InitConfig,
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| format!("Invalid time '{}'. Expected HH:MM", value))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let settings_service = match cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::at_default_location(),
    };

    if let Some(Commands::InitConfig) = cli.command {
        settings_service.save(&Settings::default())?;
        println!("Wrote {}", settings_service.path().display());
        return Ok(());
    }

    let settings = settings_service.load()?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    log::info!("Starting Surgery Calendar for week of {}", today);

    let mut scheduler = Scheduler::from_settings(today, &settings)?;

    if let Some(Commands::Move { id, date, time }) = cli.command {
        let target = CellAddress::from_timestamp(date.and_time(time))
            .context("Target is not a grid cell")?;

        let handle = scheduler.begin_drag(id)?;
        // Enter the target column at the event's own time, then drop
        let entry = scheduler
            .drag_preview(handle)
            .map(|preview| CellAddress::containing(preview.start).with_day(date));
        if let Some(entry) = entry {
            scheduler.on_hover_cell(handle, entry);
        }
        scheduler.on_hover_cell(handle, target);
        match scheduler.end_drag(handle, Some(target))? {
            Some(event) => println!(
                "Moved \"{}\" to {} {}",
                event.title,
                event.start.date(),
                format_time_range(&event, settings.uses_12h_clock())
            ),
            None => println!("Nothing moved"),
        }
        println!();
    }

    print_week(&scheduler, &settings);
    Ok(())
}

fn print_week(scheduler: &Scheduler, settings: &Settings) {
    for day in scheduler.visible_week().dates() {
        println!("{} {}", format_day_header(day), day.format("%A"));
        for event in scheduler.store().events_on_day(day) {
            println!(
                "  [{}] {}  {}",
                event.id,
                format_time_range(&event, settings.uses_12h_clock()),
                event.title
            );
        }
    }
}
