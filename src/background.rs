use std::sync::Arc;
use std::time::Duration;
use chrono::Local;
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};
use crate::error::AppError;
use crate::infra::changes::ChangeOp;
use crate::state::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);
const SWEEP_BATCH: i64 = 50;

/// Moves upcoming bookings whose slot has ended to COMPLETED. Completion
/// keeps the capacity unit consumed, so the slot row is never touched here.
pub async fn start_completion_sweeper(state: Arc<AppState>) {
    info!("Starting booking completion sweeper...");

    loop {
        let now = Local::now().naive_local();

        match state.booking_repo.find_due_completion(now, SWEEP_BATCH).await {
            Ok(due) => {
                for booking in due {
                    let span = info_span!("complete_booking", booking_id = %booking.id);

                    let state = state.clone();
                    async move {
                        match state.booking_repo.complete(&booking.id).await {
                            Ok(completed) => {
                                info!("Booking completed");
                                state.changes.publish("bookings", &completed.id, ChangeOp::Update);
                            }
                            // Lost a race with a cancel between the sweep
                            // query and the transition; nothing to do.
                            Err(AppError::AlreadyTerminal(_)) => {}
                            Err(e) => error!("Failed to complete booking: {:?}", e),
                        }
                    }
                    .instrument(span)
                    .await;
                }
            }
            Err(e) => error!("Failed to fetch due bookings: {:?}", e),
        }

        sleep(SWEEP_INTERVAL).await;
    }
}
