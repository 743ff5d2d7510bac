//! Farebox command-line surface.
//!
//! Replaces the desktop window of the original utility: each subcommand is
//! one of its buttons. The image and camera decoders stay external; their
//! decoded text is passed to `validate` as an argument.
//!
//! Usage:
//!   farebox routes                                - list catalog routes
//!   farebox book --passenger <name> --route <n>   - book and print payload
//!   farebox validate --text <payload> --method m  - validate a payload
//!   farebox bookings                              - recent bookings
//!   farebox logs                                  - recent validation logs
//!   farebox export                                - write booking snapshot CSV

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use farebox_core::booking::ValidationMethod;
use farebox_service::BookingService;
use farebox_store::{DbClient, SqliteBookingRepository};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "farebox", about = "Bus ticket booking and validation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available catalog routes with their indexes
    Routes,
    /// Book a ticket and print its scannable payload
    Book {
        #[arg(long)]
        passenger: String,
        /// Zero-based index into the route catalog
        #[arg(long)]
        route: usize,
    },
    /// Validate raw decoded payload text against the record store
    Validate {
        #[arg(long)]
        text: String,
        /// Acquisition channel: image or webcam
        #[arg(long)]
        method: String,
    },
    /// Show the most recent bookings
    Bookings,
    /// Show the most recent validation logs
    Logs,
    /// Export the full booking table to the configured CSV path
    Export,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = farebox_store::app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Opening database at {}", config.database.url);

    let db = DbClient::new(&config.database.url)
        .await
        .context("Failed to open database")?;
    db.migrate().await.context("Failed to run migrations")?;

    let repo = Arc::new(SqliteBookingRepository::new(db.pool.clone()));
    let service = BookingService::new(repo);

    let result = run(cli.command, &service, &config).await;
    db.close().await;
    result
}

async fn run(
    command: Command,
    service: &BookingService,
    config: &farebox_store::app_config::Config,
) -> anyhow::Result<()> {
    match command {
        Command::Routes => {
            let routes = farebox_catalog::load_routes(&config.catalog.path).await?;
            for (idx, route) in routes.iter().enumerate() {
                println!(
                    "[{idx}] {} @ {} fare {}",
                    route.label(),
                    route.time,
                    route.fare
                );
            }
        }
        Command::Book { passenger, route } => {
            let routes = farebox_catalog::load_routes(&config.catalog.path).await?;
            let selected = routes.get(route);
            let (booking, payload) = service.book(&passenger, selected).await?;
            println!("Booked ticket {} for {}", booking.id, booking.passenger);
            println!("{payload}");
        }
        Command::Validate { text, method } => {
            let method: ValidationMethod = method
                .parse()
                .map_err(|e: String| anyhow!(e))?;
            let receipt = service.validate(&text, method).await?;
            println!(
                "Booking {} validated via {} (log {})",
                receipt.booking_id, method, receipt.log_id
            );
        }
        Command::Bookings => {
            for b in service.recent_bookings(config.display.recent_limit).await? {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    b.id, b.passenger, b.route, b.time, b.fare, b.status
                );
            }
        }
        Command::Logs => {
            for log in service.recent_logs(config.display.recent_limit).await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    log.log_id, log.booking_id, log.method, log.timestamp
                );
            }
        }
        Command::Export => {
            let bookings = service.export_bookings().await?;
            farebox_catalog::write_bookings_csv(&config.export.path, &bookings).await?;
            println!(
                "Exported {} bookings to {}",
                bookings.len(),
                config.export.path
            );
        }
    }
    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farebox_cli=info,farebox_service=info,farebox_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
