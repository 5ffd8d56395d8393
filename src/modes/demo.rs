use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use rand::Rng;
use termcolor::WriteColor;

use super::Emitter;
use crate::error::EmitError;
use crate::event::StateEvent;
use crate::general::pacing::Pacer;
use crate::generator::{particle_id, random_hit, HitRanges};
use crate::io::report::RunSummary;

/// One stage of the scripted demo session.
#[derive(Clone, Debug)]
pub struct DemoPhase {
    pub title: &'static str,
    pub hits: u32,
    pub position: RangeInclusive<f32>,
    pub energy: RangeInclusive<f32>,
    pub spacing: Duration,
}

/// Slow start, moderate activity, then a dense burst.
pub const DEMO_PHASES: [DemoPhase; 3] = [
    DemoPhase {
        title: "Phase 1: slow start (few hits)",
        hits: 5,
        position: 0.3..=0.7,
        energy: 0.1..=0.3,
        spacing: Duration::from_millis(500),
    },
    DemoPhase {
        title: "Phase 2: moderate activity",
        hits: 10,
        position: 0.2..=0.8,
        energy: 0.3..=0.7,
        spacing: Duration::from_millis(200),
    },
    DemoPhase {
        title: "Phase 3: high activity (many hits)",
        hits: 20,
        position: 0.0..=1.0,
        energy: 0.5..=1.0,
        spacing: Duration::from_millis(100),
    },
];

pub const DEMO_FINAL_STATE: StateEvent = StateEvent { activity: 0.75, gesture: 0.6, presence: 0.9 };

impl<W: WriteColor, R: Rng, P: Pacer> Emitter<W, R, P> {
    /// Play every phase in order, then send the closing state. Particle ids
    /// continue across phases.
    pub fn run_demo(&mut self) -> Result<RunSummary, EmitError> {
        self.reporter.banner("Demo Mode")?;
        self.reporter.line("Simulating a typical interaction session")?;

        let start = Instant::now();
        let mut summary = RunSummary::default();
        let mut index = 0;
        for phase in DEMO_PHASES.iter() {
            self.reporter.line(&format!("\n{}", phase.title))?;
            let ranges = HitRanges::new(phase.position.clone(), phase.energy.clone());
            for _ in 0..phase.hits {
                // At most 35 hits, far below the int32 id limit
                let id = particle_id(index).unwrap_or(i32::MAX);
                let hit = random_hit(&mut self.rng, id, &ranges);
                if self.emit_hit(&hit)? {
                    summary.hits_sent += 1;
                }
                index += 1;
                self.pacer.pause(phase.spacing);
            }
        }

        self.reporter.line("\nSending final state")?;
        if self.emit_state(&DEMO_FINAL_STATE)? {
            summary.states_sent += 1;
        }

        summary.elapsed = start.elapsed();
        self.reporter.summary(&summary)?;
        self.reporter.line("Demo complete")?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_total_thirty_five_hits() {
        let total: u32 = DEMO_PHASES.iter().map(|p| p.hits).sum();
        assert_eq!(total, 35);
    }

    #[test]
    fn phases_escalate_energy_and_tempo() {
        for pair in DEMO_PHASES.windows(2) {
            assert!(pair[1].energy.start() >= pair[0].energy.start());
            assert!(pair[1].spacing < pair[0].spacing);
        }
    }
}
