use std::time::{Duration, Instant};

use rand::Rng;
use termcolor::WriteColor;

use super::Emitter;
use crate::error::EmitError;
use crate::event::HitEvent;
use crate::general::pacing::Pacer;
use crate::generator::{particle_id, random_hit, sequence_hit, HitRanges};
use crate::io::report::RunSummary;

impl<W: WriteColor, R: Rng, P: Pacer> Emitter<W, R, P> {
    /// `count` uniformly random hits, `interval` apart.
    pub fn run_random(&mut self, count: u64, interval: Duration) -> Result<RunSummary, EmitError> {
        self.reporter.banner("Random Mode")?;
        self.reporter.line(&format!(
            "Sending {} random hits with {:.3}s interval\n",
            count,
            interval.as_secs_f64()
        ))?;
        let ranges = HitRanges::full();
        self.run_counted(count, interval, |rng, i| random_hit(rng, i, &ranges))
    }

    /// `count` hits along the deterministic grid walk, `interval` apart.
    pub fn run_sequence(&mut self, count: u64, interval: Duration) -> Result<RunSummary, EmitError> {
        self.reporter.banner("Sequence Mode")?;
        self.reporter.line(&format!(
            "Sending {} sequenced hits with {:.3}s interval\n",
            count,
            interval.as_secs_f64()
        ))?;
        self.run_counted(count, interval, |_, i| sequence_hit(i))
    }

    fn run_counted<F>(&mut self, count: u64, interval: Duration, mut next_hit: F) -> Result<RunSummary, EmitError>
    where
        F: FnMut(&mut R, i32) -> HitEvent,
    {
        let start = Instant::now();
        let mut summary = RunSummary::default();
        for i in 0..count {
            let Some(id) = particle_id(i) else {
                tracing::warn!(sent = summary.hits_sent, "particle ids exhausted, stopping");
                break;
            };
            let hit = next_hit(&mut self.rng, id);
            if self.emit_hit(&hit)? {
                summary.hits_sent += 1;
            }
            self.pacer.pause(interval);
        }
        summary.elapsed = start.elapsed();
        self.reporter.summary(&summary)?;
        Ok(summary)
    }
}
