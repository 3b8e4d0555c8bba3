use rollcall::app_config::AppConfig;
use rollcall::positioning;
use rollcall::session::AttendanceSession;
use tokio::{signal, task};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let source = positioning::from_config(config.positioning())?;
    info!("✅  Initialized {} position source", config.positioning().source_name());

    let zone = *config.zone();
    let session = AttendanceSession::new(source, zone, config.boundary_policy());
    let mut state_rx = session.subscribe();
    let state_listener = task::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let state = state_rx.borrow_and_update().clone();
            if state.is_settled() {
                info!("🔔 Check state: {}", state);
            } else {
                debug!("🔔 Check state: {}", state);
            }
        }
    });
    info!(
        policy = %config.boundary_policy(),
        "✅  Watching zone {} with a radius of {} m",
        zone.center,
        zone.radius_meters
    );

    tokio::select! {
        outcome = session.check() => match outcome {
            Ok(result) if result.is_inside() => info!("🎓 Attendance can be marked, {}", result),
            Ok(result) => warn!("🚫 Attendance cannot be marked, {}", result),
            Err(e) => warn!("⚠️ Could not determine eligibility: {}. Retry once the location is available", e),
        },
        _ = signal::ctrl_c() => {
            session.cancel();
            warn!("🛑 Location check abandoned");
        }
    }

    // Closes the state channel so the listener drains the final state and stops
    drop(session);
    state_listener.await?;

    Ok(())
}
