use lapwatch_core::{format_hms, Stopwatch, StopwatchError};
use std::time::{Duration, Instant};

#[test]
fn test_elapsed_sums_run_intervals() {
    // Two separate run intervals; elapsed after the second stop must equal
    // the sum of the interval deltas, regardless of the gap between them.
    let mut sw = Stopwatch::new();
    let t0 = Instant::now();

    sw.start(t0).unwrap();
    sw.stop(t0 + Duration::from_secs(5)).unwrap();

    // 10 seconds pass while stopped; they must not count
    sw.start(t0 + Duration::from_secs(15)).unwrap();
    sw.stop(t0 + Duration::from_secs(22)).unwrap();

    assert_eq!(
        sw.elapsed(t0 + Duration::from_secs(30)),
        Duration::from_secs(5 + 7)
    );
}

#[test]
fn test_elapsed_includes_open_interval_while_running() {
    let mut sw = Stopwatch::new();
    let t0 = Instant::now();

    sw.start(t0).unwrap();
    assert_eq!(sw.elapsed(t0 + Duration::from_secs(3)), Duration::from_secs(3));
    assert!(sw.is_running());

    // a pure read does not mutate: asking again later still tracks the clock
    assert_eq!(sw.elapsed(t0 + Duration::from_secs(9)), Duration::from_secs(9));
}

#[test]
fn test_reset_zeroes_accumulation() {
    let mut sw = Stopwatch::new();
    let t0 = Instant::now();

    sw.start(t0).unwrap();
    sw.stop(t0 + Duration::from_secs(42)).unwrap();
    sw.reset().unwrap();

    assert_eq!(sw.elapsed(t0 + Duration::from_secs(60)), Duration::ZERO);
    assert!(!sw.is_running());
}

#[test]
fn test_toggle_twice_returns_to_stopped() {
    let mut sw = Stopwatch::new();
    let t0 = Instant::now();

    // with no time advancing, accumulation is unchanged
    sw.toggle(t0);
    sw.toggle(t0);
    assert!(!sw.is_running());
    assert_eq!(sw.elapsed(t0), Duration::ZERO);

    // with time advancing, accumulation grows by exactly the gap
    sw.toggle(t0 + Duration::from_secs(1));
    sw.toggle(t0 + Duration::from_secs(4));
    assert!(!sw.is_running());
    assert_eq!(sw.elapsed(t0 + Duration::from_secs(100)), Duration::from_secs(3));
}

#[test]
fn test_state_preconditions() {
    let mut sw = Stopwatch::new();
    let t0 = Instant::now();

    assert_eq!(sw.stop(t0), Err(StopwatchError::NotRunning));
    sw.start(t0).unwrap();
    assert_eq!(sw.start(t0), Err(StopwatchError::AlreadyRunning));
    assert_eq!(sw.reset(), Err(StopwatchError::StillRunning));

    // a failed operation leaves the state machine intact
    sw.stop(t0 + Duration::from_secs(2)).unwrap();
    assert_eq!(sw.elapsed(t0 + Duration::from_secs(2)), Duration::from_secs(2));
}

#[test]
fn test_display_formatting_matches_elapsed() {
    let mut sw = Stopwatch::new();
    let t0 = Instant::now();

    sw.start(t0).unwrap();
    sw.stop(t0 + Duration::from_secs(3661)).unwrap();

    let shown = format_hms(sw.elapsed(t0 + Duration::from_secs(3661)).as_secs());
    assert_eq!(shown, "01:01:01");
}
