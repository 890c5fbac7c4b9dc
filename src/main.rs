use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use skywatch::application::config::AppConfig;
use skywatch::application::services::monitor::MonitorService;
use skywatch::domain::ports::notifier::AlertNotifier;
use skywatch::infrastructure::notifications::composite::CompositeNotifier;
use skywatch::infrastructure::notifications::email::EmailNotifier;
use skywatch::infrastructure::notifications::terminal::TerminalNotifier;
use skywatch::infrastructure::persistence::sqlite_store::SqliteStore;
use skywatch::infrastructure::provider::openweather::OpenWeatherProvider;
use skywatch::presentation::cli::app::{Cli, Commands};
use skywatch::presentation::cli::commands::alerts::run_alerts;
use skywatch::presentation::cli::commands::daemon::run_daemon;
use skywatch::presentation::cli::commands::report::run_report;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  SKYWATCH — Weather Monitor".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    match cli.command {
        Some(Commands::Daemon) | None => {
            config.validate()?;
            let store = SqliteStore::new(&config.database.path)?;
            print_banner();
            tracing::info!(
                "Monitoring {} location(s) every {} minute(s)",
                config.general.locations.len(),
                config.general.interval_minutes,
            );

            // Manual DI: main.rs is the only place that knows concrete types
            let provider = OpenWeatherProvider::new(
                &config.provider.base_url,
                &config.provider.api_key,
                config.general.unit,
            )?;
            let notifiers: Vec<Box<dyn AlertNotifier>> = vec![
                Box::new(TerminalNotifier::new()),
                Box::new(EmailNotifier::new(config.email.clone())),
            ];
            let notifier = CompositeNotifier::new(notifiers);

            let service = MonitorService::new(
                &provider,
                &store,
                &store,
                &notifier,
                &config.general.locations,
                config.general.unit,
                config.thresholds.temp_threshold,
                config.thresholds.consecutive_breaches,
            );
            run_daemon(&service, config.general.interval_minutes * 60).await?;
        }
        Some(Commands::Report {
            location,
            days,
            json,
        }) => {
            let store = SqliteStore::new(&config.database.path)?;
            run_report(&store, &location, days, config.general.unit, json)?;
        }
        Some(Commands::Alerts {
            location,
            limit,
            json,
        }) => {
            let store = SqliteStore::new(&config.database.path)?;
            run_alerts(
                &store,
                &location,
                config.thresholds.temp_threshold,
                limit,
                config.general.unit,
                json,
            )?;
        }
    }

    Ok(())
}
