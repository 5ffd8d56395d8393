//! The five ways of driving the emitter. Every mode sends through the same
//! [`Emitter`], which owns the socket, the console reporter, the random
//! source, the pacer and the cancellation flag.

mod batch;
mod demo;
mod interactive;
mod stress;

use std::io::{self, BufReader};
use std::time::Duration;

use rand::Rng;
use termcolor::WriteColor;

use crate::error::EmitError;
use crate::event::{HitEvent, StateEvent};
use crate::general::pacing::Pacer;
use crate::general::shutdown::CancelFlag;
use crate::io::report::{Reporter, RunSummary};
use crate::remote::osc_sender::OscSender;

pub use demo::{DemoPhase, DEMO_FINAL_STATE, DEMO_PHASES};

/// A fully resolved run request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModePlan {
    Interactive,
    Random { count: u64, interval: Duration },
    Sequence { count: u64, interval: Duration },
    /// `rate <= 0` sends nothing.
    Stress { rate: i64, duration: Duration },
    Demo,
}

impl ModePlan {
    /// Modes that honor Ctrl+C through the cancel flag.
    pub fn is_interruptible(&self) -> bool {
        matches!(self, ModePlan::Interactive | ModePlan::Stress { .. })
    }
}

pub struct Emitter<W: WriteColor, R: Rng, P: Pacer> {
    sender: OscSender,
    reporter: Reporter<W>,
    rng: R,
    pacer: P,
    cancel: CancelFlag,
}

impl<W: WriteColor, R: Rng, P: Pacer> Emitter<W, R, P> {
    pub fn new(sender: OscSender, reporter: Reporter<W>, rng: R, pacer: P) -> Self {
        Emitter { sender, reporter, rng, pacer, cancel: CancelFlag::new() }
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn reporter_mut(&mut self) -> &mut Reporter<W> {
        &mut self.reporter
    }

    pub fn into_parts(self) -> (Reporter<W>, P) {
        (self.reporter, self.pacer)
    }

    /// Run `plan` to completion. Interactive mode reads from stdin.
    pub fn run(&mut self, plan: ModePlan) -> Result<RunSummary, EmitError> {
        match plan {
            ModePlan::Interactive => self.run_interactive(BufReader::new(io::stdin())),
            ModePlan::Random { count, interval } => self.run_random(count, interval),
            ModePlan::Sequence { count, interval } => self.run_sequence(count, interval),
            ModePlan::Stress { rate, duration } => self.run_stress(rate, duration),
            ModePlan::Demo => self.run_demo(),
        }
    }

    /// Send and report one hit. Returns false when the datagram could not
    /// be handed to the OS; that is logged and the run goes on.
    fn emit_hit(&mut self, hit: &HitEvent) -> Result<bool, EmitError> {
        match self.sender.send_hit(hit) {
            Ok(()) => {
                self.reporter.hit(hit)?;
                Ok(true)
            }
            Err(e @ EmitError::Send { .. }) => {
                tracing::warn!("dropped /hit {}: {}", hit.particle_id, e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn emit_state(&mut self, state: &StateEvent) -> Result<bool, EmitError> {
        match self.sender.send_state(state) {
            Ok(()) => {
                self.reporter.state(state)?;
                Ok(true)
            }
            Err(e @ EmitError::Send { .. }) => {
                tracing::warn!("dropped /state: {}", e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
