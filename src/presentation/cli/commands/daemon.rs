use std::time::Duration;

use crate::application::services::monitor::MonitorService;

/// Run the monitoring daemon loop at the configured interval.
///
/// The first tick fires immediately, so a reading is taken at startup
/// rather than one full interval later. The daemon runs until it receives
/// a SIGINT signal (Ctrl+C) via [`tokio::signal::ctrl_c()`], at which point
/// it shuts down gracefully between cycles and returns `Ok(())`.
///
/// Errors during individual monitoring cycles are logged but do not stop the daemon.
///
/// # Errors
///
/// Currently infallible; the signature leaves room for fatal setup errors.
pub async fn run_daemon(service: &MonitorService<'_>, interval_secs: u64) -> anyhow::Result<()> {
    tracing::info!("Daemon started (interval: {interval_secs}s)");
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let result = service.run_once().await;
                tracing::info!(
                    "Cycle complete: {} stored, {} fetch failure(s), {} alert(s), {} summary(ies)",
                    result.observations_stored,
                    result.fetch_failures,
                    result.alerts_fired,
                    result.summaries_written,
                );
            }
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping cleanly...");
                println!("\nStopping skywatch...");
                break;
            }
        }
    }
    Ok(())
}
