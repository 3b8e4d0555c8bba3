use crate::domain::{AttendanceCheckResult, BoundaryPolicy, CheckState, GeoZone, InvalidInputError};
use crate::geofence::check_attendance_with;
use crate::positioning::{LocationUnavailableError, PositionSource};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{info, instrument, warn};

/// Runs user-triggered location checks against a single zone and publishes their state.
///
/// Only the most recent attempt may publish. Starting a new check or calling [`AttendanceSession::cancel`]
/// supersedes the attempt in flight, whose result is then discarded.
pub struct AttendanceSession {
    source: Arc<dyn PositionSource>,
    zone: GeoZone,
    policy: BoundaryPolicy,
    attempt: AtomicU64,
    state_tx: WatchSender<CheckState>,
}

impl AttendanceSession {
    pub fn new(source: Arc<dyn PositionSource>, zone: GeoZone, policy: BoundaryPolicy) -> Self {
        let (state_tx, _) = watch::channel(CheckState::Idle);

        AttendanceSession {
            source,
            zone,
            policy,
            attempt: AtomicU64::new(0),
            state_tx,
        }
    }

    pub fn subscribe(&self) -> WatchReceiver<CheckState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> CheckState {
        self.state_tx.borrow().clone()
    }

    #[instrument(skip(self))]
    pub async fn check(&self) -> Result<AttendanceCheckResult, CheckError> {
        let mut attempt = 0;
        // Attempt ids are only handed out while holding the state lock
        self.state_tx.send_modify(|state| {
            attempt = self.attempt.fetch_add(1, Ordering::SeqCst) + 1;
            *state = CheckState::Pending;
        });
        info!(attempt, "📍 Checking location...");
        let mut guard = AbandonGuard {
            session: self,
            attempt,
            finished: false,
        };

        let (state, outcome) = match self.source.current_position().await {
            Ok(position) => match check_attendance_with(&position, &self.zone, self.policy) {
                Ok(result) => (CheckState::from(result), Ok(result)),
                Err(e) => (CheckState::Invalid(e.clone()), Err(CheckError::InvalidInput(e))),
            },
            Err(e) => (CheckState::Unavailable(e.clone()), Err(CheckError::LocationUnavailable(e))),
        };

        guard.finished = true;
        if !self.publish(attempt, state) {
            info!(attempt, "📍 Checking location... discarded, attempt was superseded");
            return Err(CheckError::Cancelled);
        }

        match &outcome {
            Ok(result) => info!(attempt, "📍 Checking location... OK, {}", result),
            Err(e) => warn!(attempt, "📍 Checking location... failed, {}", e),
        }
        outcome
    }

    /// Abandons the check in flight, if any, and returns to [`CheckState::Idle`].
    pub fn cancel(&self) {
        self.state_tx.send_modify(|state| {
            self.attempt.fetch_add(1, Ordering::SeqCst);
            *state = CheckState::Idle;
        });
        info!("📍 Location check cancelled");
    }

    fn publish(&self, attempt: u64, new_state: CheckState) -> bool {
        self.state_tx.send_if_modified(|state| {
            if self.attempt.load(Ordering::SeqCst) != attempt {
                return false;
            }
            *state = new_state;
            true
        })
    }
}

/// Returns the session to [`CheckState::Idle`] when a `check()` future is dropped before it finished.
struct AbandonGuard<'a> {
    session: &'a AttendanceSession,
    attempt: u64,
    finished: bool,
}

impl Drop for AbandonGuard<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        if self.session.publish(self.attempt, CheckState::Idle) {
            info!(attempt = self.attempt, "📍 Checking location... abandoned");
        }
    }
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum CheckError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
    #[error("could not determine location: {0}")]
    LocationUnavailable(#[from] LocationUnavailableError),
    #[error("the location check was cancelled")]
    Cancelled,
}
