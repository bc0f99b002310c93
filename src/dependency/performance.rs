/// Milliseconds from the browser Performance API, or 0.0 when no window is
/// available (native builds, worker contexts without `performance`).
#[cfg(target_arch = "wasm32")]
pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn performance_now() -> f64 {
    0.0
}
