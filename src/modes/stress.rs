use std::time::{Duration, Instant};

use rand::Rng;
use termcolor::WriteColor;

use super::Emitter;
use crate::error::EmitError;
use crate::general::pacing::Pacer;
use crate::generator::{particle_id, random_hit, HitRanges};
use crate::io::report::RunSummary;

impl<W: WriteColor, R: Rng, P: Pacer> Emitter<W, R, P> {
    /// Random hits paced at `rate` per second until `duration` of wall-clock
    /// time has passed or the cancel flag is raised.
    pub fn run_stress(&mut self, rate: i64, duration: Duration) -> Result<RunSummary, EmitError> {
        self.reporter.banner("Stress Mode")?;
        self.reporter.line(&format!(
            "Sending hits at {} hits/s for {:.1}s",
            rate,
            duration.as_secs_f64()
        ))?;
        self.reporter.line("Press Ctrl+C to stop early\n")?;

        let start = Instant::now();
        let mut summary = RunSummary::default();
        if rate > 0 {
            let interval = Duration::from_secs_f64(1.0 / rate as f64);
            let ranges = HitRanges::full();
            let mut index = 0;
            // Next send time; keeps sleep overshoot from accumulating
            let mut deadline = start;
            while start.elapsed() < duration {
                if self.cancel.is_cancelled() {
                    tracing::debug!(hits_sent = summary.hits_sent, "stress run interrupted");
                    summary.interrupted = true;
                    break;
                }
                let Some(id) = particle_id(index) else {
                    tracing::warn!(sent = summary.hits_sent, "particle ids exhausted, stopping");
                    break;
                };
                let hit = random_hit(&mut self.rng, id, &ranges);
                if self.emit_hit(&hit)? {
                    summary.hits_sent += 1;
                }
                index += 1;

                deadline += interval;
                let now = Instant::now();
                match deadline.checked_duration_since(now) {
                    Some(wait) => self.pacer.pause(wait),
                    // Fell behind: resume from now instead of bursting to catch up
                    None => deadline = now,
                }
            }
        } else {
            tracing::debug!(rate, "non-positive rate, nothing to send");
        }

        summary.elapsed = start.elapsed();
        self.reporter.rate_summary(&summary)?;
        Ok(summary)
    }
}
