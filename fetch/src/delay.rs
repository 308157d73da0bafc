//! Timer helpers.

use std::time::Duration;

/// Waits at least `milliseconds` before resolving.
///
/// There is no way to cancel the wait other than dropping the future.
pub async fn delay(milliseconds: u64) {
    delay_for(Duration::from_millis(milliseconds)).await;
}

/// Waits at least `duration` before resolving.
pub async fn delay_for(duration: Duration) {
    tokio::time::sleep(duration).await;
}
