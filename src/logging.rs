//! Logging setup.
//!
//! The library only emits `tracing` events; hosts that have no subscriber
//! of their own can install one here.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global `fmt` subscriber.
///
/// # Environment
/// - `RUST_LOG`: filter directive (default: `info`),
///   e.g. `RUST_LOG=u_timetable=debug`.
///
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Installs a `debug`-level subscriber that writes through the test
/// harness, so output is captured per test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::check_time_conflict;
    use crate::models::Exam;

    #[test]
    fn test_init_is_idempotent() {
        init_test();
        init_test();
        init();

        // Emits a warn event through the installed subscriber.
        let bad = Exam::new("not-a-date", "09:00", 1.0, "R1", "Smith", "10A");
        let good = Exam::new("2024-01-10", "09:00", 1.0, "R1", "Smith", "10A");
        assert!(!check_time_conflict(&bad, &good));
    }
}
