use std::io::BufRead;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use rand::Rng;
use termcolor::WriteColor;

use super::Emitter;
use crate::error::EmitError;
use crate::general::pacing::Pacer;
use crate::general::stdin_handler::spawn_line_reader;
use crate::generator::{particle_id, random_hit, random_state, HitRanges};
use crate::io::report::RunSummary;

// How often the cancel flag is checked while waiting for input
const INPUT_POLL: Duration = Duration::from_millis(100);

impl<W: WriteColor, R: Rng, P: Pacer> Emitter<W, R, P> {
    /// Line-driven sending. `q` quits, `state` sends a random state, any
    /// other line (empty included) sends a random hit. End of input quits.
    pub fn run_interactive<I>(&mut self, input: I) -> Result<RunSummary, EmitError>
    where
        I: BufRead + Send + 'static,
    {
        self.reporter.banner("Interactive Mode")?;
        self.reporter.line("Press Enter to send a random hit")?;
        self.reporter.line("Type 'state' and Enter to send a state")?;
        self.reporter.line("Type 'q' and Enter to quit\n")?;

        // The reader thread stays blocked on stdin after we return; it dies with the process.
        let (lines, _reader) = spawn_line_reader(input);
        let start = Instant::now();
        let ranges = HitRanges::full();
        let mut summary = RunSummary::default();
        let mut index = 0;

        self.reporter.prompt("> ")?;
        loop {
            if self.cancel.is_cancelled() {
                self.reporter.line("")?;
                self.reporter.notice("Interrupted by user")?;
                summary.interrupted = true;
                break;
            }
            let line = match lines.recv_timeout(INPUT_POLL) {
                Ok(line) => line,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::debug!("input closed");
                    self.reporter.line("")?;
                    break;
                }
            };

            match line.trim().to_lowercase().as_str() {
                "q" => break,
                "state" => {
                    let state = random_state(&mut self.rng);
                    if self.emit_state(&state)? {
                        summary.states_sent += 1;
                    }
                }
                _ => {
                    let Some(id) = particle_id(index) else {
                        self.reporter.notice("Particle ids exhausted")?;
                        break;
                    };
                    let hit = random_hit(&mut self.rng, id, &ranges);
                    if self.emit_hit(&hit)? {
                        summary.hits_sent += 1;
                    }
                    index += 1;
                }
            }
            self.reporter.prompt("> ")?;
        }

        summary.elapsed = start.elapsed();
        Ok(summary)
    }
}
