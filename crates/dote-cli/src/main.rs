//! Dote Ops demo binary
//!
//! Boots the whole stack against the seeded in-memory stores: signs in the
//! demo manager, starts the piece-timer ticker, logs a dashboard summary,
//! then idles until ctrl-c or SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dote_auth::Session;
use dote_core::config::AppConfig;
use dote_core::traits::{Clock, SystemClock};
use dote_journals::HistoryService;
use dote_models::{format_elapsed, TeamMember};
use dote_queries::{BoardQueries, DashboardQueries};
use dote_store::Stores;
use dote_timers::{Ticker, TimeTracker, TimerService};

// Fixture ids from the seeded store
const DEMO_JOB: &str = "JOB-101";
const DEMO_PIECE: &str = "p1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        warn!("Failed to load config from env: {e}, using defaults");
        AppConfig::default()
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        title = %config.instance.app_title,
        timezone = %config.instance.timezone,
        "Starting Dote Ops"
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let stores = Stores::seeded().await?;
    info!("Seeded in-memory stores with the demo fixtures");

    let mut session = Session::new(stores.team.clone());
    let manager = session.sign_in("ana@dote.com", "password123").await?;

    let history = HistoryService::new(stores.jobs.clone(), clock.clone());
    let tracker = Arc::new(TimeTracker::new());
    let timers = TimerService::new(tracker.clone(), stores.jobs.clone(), history);

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let ticker = Ticker::new(
        tracker.clone(),
        Duration::from_secs(config.timers.tick_interval_seconds),
    );
    let ticker_task = tokio::spawn(async move { ticker.run(shutdown_rx).await });

    timers.start(DEMO_PIECE);
    info!(piece = DEMO_PIECE, "Piece timer running");

    log_dashboard_summary(
        &stores,
        &manager,
        clock.today(),
        config.dashboard.alert_window_days,
    )
    .await?;

    shutdown_signal().await;

    timers.stop(DEMO_JOB, DEMO_PIECE, &manager).await;
    info!(
        piece = DEMO_PIECE,
        elapsed = %format_elapsed(tracker.elapsed(DEMO_PIECE)),
        "Paused piece timer"
    );
    if let Some(job) = stores.jobs.get(DEMO_JOB).await? {
        for entry in &job.history {
            info!(date = %entry.date, user = %entry.user, action = %entry.action, "history");
        }
    }

    shutdown_tx.send(true).ok();
    ticker_task.await?;
    session.sign_out();
    info!("Shutdown complete");
    Ok(())
}

async fn log_dashboard_summary(
    stores: &Stores,
    manager: &TeamMember,
    today: chrono::NaiveDate,
    alert_window_days: u64,
) -> anyhow::Result<()> {
    let dashboard = DashboardQueries::new(stores.jobs.clone(), stores.dates.clone());
    let boards = BoardQueries::new(stores.jobs.clone(), stores.team.clone());

    let stats = dashboard.monthly_stats(today).await?;
    info!(
        jobs_this_month = stats.jobs_this_month,
        completed_on_time = stats.completed_on_time,
        on_time_rate = stats.on_time_rate,
        "Monthly performance"
    );

    let my_jobs = boards.my_jobs(&manager.id).await?;
    info!(name = %manager.name, assigned_jobs = my_jobs.len(), "Signed-in member workload");

    for job in dashboard.overdue_jobs(today).await? {
        warn!(job_id = %job.id, title = %job.title, deadline = %job.deadline, "Job overdue");
    }

    let completed_pieces = dashboard.completed_pieces_count().await?;
    info!(completed_pieces, "Pieces done or approved");

    for date in dashboard
        .upcoming_commemorative_dates(today, alert_window_days)
        .await?
    {
        info!(
            name = %date.name,
            day = date.day,
            month = date.month + 1,
            client_id = date.client_id.as_deref().unwrap_or("-"),
            "Upcoming commemorative date"
        );
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dote=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
