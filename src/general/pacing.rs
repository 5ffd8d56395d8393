use std::thread;
use std::time::Duration;

/// Waits between sends.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Seconds from the command line to a sleepable duration.
/// NaN, negative and zero values collapse to zero; `inf` and anything too
/// large for a `Duration` saturate to `Duration::MAX`.
pub fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        Duration::ZERO
    } else {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}
