use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use crate::general::pacing::secs_to_duration;
use crate::modes::ModePlan;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9000;

/// Which generation strategy drives the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Press Enter to send a random hit, 'state' for a state, 'q' to quit
    Interactive,
    /// Send --count random hits
    Random,
    /// Send --count hits along a predictable grid
    Sequence,
    /// Send random hits at --rate for --duration seconds
    Stress,
    /// Simulate a typical session in three phases of rising activity
    Demo,
}

#[derive(Parser, Debug)]
#[command(name = "osc-hit-emitter", version)]
#[command(about = "Send synthetic /hit and /state OSC messages to test the plate synth without the particle app")]
#[command(after_help = "Examples:\n  osc-hit-emitter\n  osc-hit-emitter --mode random --count 20\n  osc-hit-emitter --mode stress --rate 200 --duration 10")]
pub struct Args {
    /// Destination host
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Destination port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Operating mode
    #[arg(long, value_enum, default_value_t = Mode::Interactive)]
    pub mode: Mode,

    /// Number of hits to send (random and sequence modes)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub count: i64,

    /// Seconds between hits (random and sequence modes)
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub interval: f64,

    /// Hits per second (stress mode)
    #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
    pub rate: i64,

    /// Seconds to run (stress mode)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub duration: f64,

    /// Diagnostic logging on stderr: -v for debug, -vv for trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Non-positive counts mean no iterations.
    pub fn count(&self) -> u64 {
        self.count.max(0) as u64
    }

    pub fn interval(&self) -> Duration {
        secs_to_duration(self.interval)
    }

    pub fn duration(&self) -> Duration {
        secs_to_duration(self.duration)
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn plan(&self) -> ModePlan {
        match self.mode {
            Mode::Interactive => ModePlan::Interactive,
            Mode::Random => ModePlan::Random { count: self.count(), interval: self.interval() },
            Mode::Sequence => ModePlan::Sequence { count: self.count(), interval: self.interval() },
            Mode::Stress => ModePlan::Stress { rate: self.rate, duration: self.duration() },
            Mode::Demo => ModePlan::Demo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_documented_values() {
        let args = Args::try_parse_from(["osc-hit-emitter"]).unwrap();
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 9000);
        assert_eq!(args.mode, Mode::Interactive);
        assert_eq!(args.count(), 10);
        assert_eq!(args.interval(), Duration::from_millis(100));
        assert_eq!(args.rate, 200);
        assert_eq!(args.duration(), Duration::from_secs(5));
        assert_eq!(args.log_level(), Level::WARN);
    }

    #[test]
    fn parses_every_option() {
        let args = Args::try_parse_from([
            "osc-hit-emitter", "--host", "10.0.0.5", "--port", "9100", "--mode", "stress",
            "--rate", "100", "--duration", "1.5", "-vv",
        ])
        .unwrap();
        assert_eq!(args.host, "10.0.0.5");
        assert_eq!(args.port, 9100);
        assert_eq!(args.log_level(), Level::TRACE);
        assert_eq!(args.plan(), ModePlan::Stress { rate: 100, duration: Duration::from_millis(1500) });
    }

    #[test]
    fn invalid_mode_is_a_usage_error() {
        let err = Args::try_parse_from(["osc-hit-emitter", "--mode", "chaos"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        assert!(Args::try_parse_from(["osc-hit-emitter", "--count", "many"]).is_err());
    }

    #[test]
    fn infinite_duration_runs_until_interrupted() {
        let args = Args::try_parse_from(["osc-hit-emitter", "--mode", "stress", "--duration", "inf"]).unwrap();
        assert_eq!(args.plan(), ModePlan::Stress { rate: 200, duration: Duration::MAX });
    }

    #[test]
    fn negative_values_clamp_instead_of_failing() {
        let args = Args::try_parse_from([
            "osc-hit-emitter", "--mode", "random", "--count", "-3", "--interval", "-0.5",
        ])
        .unwrap();
        assert_eq!(args.plan(), ModePlan::Random { count: 0, interval: Duration::ZERO });
    }
}
