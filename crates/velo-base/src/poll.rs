use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Repeatedly run `probe` until it yields a value or `timeout` elapses.
///
/// The probe runs immediately, then every `interval` until the deadline.
/// Returns `Some(value)` from the first successful probe, `None` if the
/// deadline passes first. The final wait is shortened so the deadline is
/// never overshot by a full interval.
///
/// This is the bounded replacement for ad-hoc "check every 100 ms for up
/// to 5 s" readiness loops: one-shot resources (a device node appearing, a
/// config file landing) get probed without an unbounded spin.
pub async fn poll_until<T, F>(interval: Duration, timeout: Duration, mut probe: F) -> Option<T>
where
    F: FnMut() -> Option<T>,
{
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(value) = probe() {
            return Some(value);
        }

        let now = Instant::now();
        if now >= deadline {
            return None;
        }

        sleep(interval.min(deadline - now)).await;
    }
}
