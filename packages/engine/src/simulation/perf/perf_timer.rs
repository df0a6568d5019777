/// Wall clock in milliseconds: `Date.now()` in the browser, a monotonic
/// process clock elsewhere.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Run `work`, timing it only when `enabled`. Untimed runs report 0 ms.
pub(crate) fn timed<T>(enabled: bool, work: impl FnOnce() -> T) -> (T, f64) {
    if !enabled {
        return (work(), 0.0);
    }
    let start = now_ms();
    let out = work();
    (out, (now_ms() - start).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::timed;

    #[test]
    fn disabled_reports_zero() {
        let (v, ms) = timed(false, || 41 + 1);
        assert_eq!((v, ms), (42, 0.0));
    }

    #[test]
    fn enabled_reports_non_negative() {
        let (_, ms) = timed(true, || (0..1000u32).sum::<u32>());
        assert!(ms >= 0.0);
    }
}
