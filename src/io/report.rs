use std::io::{self, Write};
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::event::{HitEvent, StateEvent};

/// Outcome of one mode run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub hits_sent: u64,
    pub states_sent: u64,
    pub elapsed: Duration,
    pub interrupted: bool,
}

impl RunSummary {
    /// Hits per second over the run, 0 when no time elapsed.
    pub fn achieved_rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.hits_sent as f64 / secs
        } else {
            0.0
        }
    }
}

/// Console output: one line per send plus colored banners and summaries.
pub struct Reporter<W: WriteColor> {
    out: W,
}

impl Reporter<StandardStream> {
    pub fn stdout() -> Self {
        Reporter::new(StandardStream::stdout(ColorChoice::Auto))
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn hit(&mut self, hit: &HitEvent) -> io::Result<()> {
        writeln!(
            self.out,
            "Sent /hit: id={}, x={:.2}, y={:.2}, energy={:.2}, surface={}",
            hit.particle_id, hit.x, hit.y, hit.energy, hit.surface
        )
    }

    pub fn state(&mut self, state: &StateEvent) -> io::Result<()> {
        writeln!(
            self.out,
            "Sent /state: activity={:.2}, gesture={:.2}, presence={:.2}",
            state.activity, state.gesture, state.presence
        )
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print without a newline and flush, for the interactive prompt.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.colored(Color::Cyan, &format!("=== {} ===", title))
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        self.colored(
            Color::Green,
            &format!("Sent {} hits in {:.2}s", summary.hits_sent, summary.elapsed.as_secs_f64()),
        )
    }

    /// Stress summary: totals plus the achieved rate.
    pub fn rate_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.summary(summary)?;
        self.colored(Color::Green, &format!("Achieved rate: {:.1} hits/s", summary.achieved_rate()))
    }

    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        self.colored(Color::Yellow, text)
    }

    fn colored(&mut self, color: Color, text: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true))?;
        writeln!(self.out, "{}", text)?;
        self.out.reset()
    }
}
