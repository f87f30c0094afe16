use std::time::{Duration, Instant};

use tracing::debug;

use crate::ipc::errors::IpcError;
use crate::ipc::traits::EventSource;
use crate::ipc::types::WindowEvent;

/// Dispatch window focus events to `on_event` until it produces an outcome or
/// `timeout` elapses.
///
/// Returns `Ok(Some(outcome))` when the handler completed and `Ok(None)` when
/// the deadline passed first. Non-focus window events are skipped.
pub fn run_event_loop<T, F>(
    events: &mut dyn EventSource,
    timeout: Duration,
    mut on_event: F,
) -> Result<Option<T>, IpcError>
where
    F: FnMut(&WindowEvent) -> Option<T>,
{
    let deadline = Instant::now() + timeout;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }

        match events.next_window_event(remaining)? {
            Some(event) if event.is_focus() => {
                if let Some(outcome) = on_event(&event) {
                    return Ok(Some(outcome));
                }
            }
            Some(event) => {
                debug!(
                    event = "core.ipc.event_skipped",
                    change = event.change,
                    con_id = event.container.id
                );
            }
            None => break,
        }
    }

    debug!(
        event = "core.ipc.event_loop_timed_out",
        timeout_ms = timeout.as_millis() as u64
    );
    Ok(None)
}
