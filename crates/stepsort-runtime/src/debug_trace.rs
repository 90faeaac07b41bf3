#![forbid(unsafe_code)]

//! Env-gated diagnostics for the engine's control and worker threads.
//!
//! Tracing subscribers are the host's business; this is the escape hatch
//! for debugging the engine itself without wiring one up. Launch with
//! `STEPSORT_DEBUG_TRACE=1` and every `debug_trace!` call lands on stderr,
//! stamped with milliseconds since process start so control-thread and
//! worker-thread lines can be interleaved by eye. Left unset, a call site
//! costs one static bool load and nothing else.
//!
//! ```bash
//! STEPSORT_DEBUG_TRACE=1 cargo run -p stepsort-demo
//! ```

use std::sync::LazyLock;
use std::time::Instant;

/// Read once on first use; every later check is a plain bool load.
static DEBUG_TRACE_ENABLED: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("STEPSORT_DEBUG_TRACE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// Anchor for the relative timestamps in trace lines.
static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Whether `STEPSORT_DEBUG_TRACE` was set when first checked.
#[inline]
pub fn is_enabled() -> bool {
    *DEBUG_TRACE_ENABLED
}

/// Milliseconds since the first trace-related call in this process.
#[inline]
pub fn elapsed_ms() -> u64 {
    START_TIME.elapsed().as_millis() as u64
}

/// Print a timestamped line to stderr when debug tracing is on.
///
/// Takes `format!`-style arguments:
///
/// ```ignore
/// debug_trace!("run {} completed after {} steps", run_id, steps);
/// ```
#[macro_export]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        if $crate::debug_trace::is_enabled() {
            eprintln!(
                "[stepsort {:>8}ms] {}",
                $crate::debug_trace::elapsed_ms(),
                format_args!($($arg)*)
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_enabled_returns_without_panicking() {
        let _ = is_enabled();
    }

    #[test]
    fn elapsed_ms_is_monotonic() {
        let t1 = elapsed_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let t2 = elapsed_ms();
        assert!(t2 >= t1);
    }
}
