use std::time::Duration;

/// Suspends the current task. Browser builds use a `setTimeout` future; host
/// builds (SSR, tests) use tokio's timer so paused-clock tests stay exact.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
