use std::process;

use clap::Parser;

use osc_hit_emitter::cli::Args;
use osc_hit_emitter::general::pacing::ThreadPacer;
use osc_hit_emitter::general::shutdown::{install_ctrlc_handler, CancelFlag};
use osc_hit_emitter::io::report::Reporter;
use osc_hit_emitter::remote::osc_sender::OscSender;
use osc_hit_emitter::{EmitError, Emitter};

fn main() {
    // Usage errors exit here with clap's status (2)
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    match run(&args) {
        Ok(_) => (),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<(), EmitError> {
    let mut reporter = Reporter::stdout();
    reporter.line(&format!("Connecting to {}:{}", args.host, args.port))?;
    let sender = match OscSender::new(&args.host, args.port) {
        Ok(sender) => sender,
        Err(err) => {
            eprintln!("Error connecting to {}:{}: {}", args.host, args.port, err);
            process::exit(1);
        }
    };
    reporter.line("Connected\n")?;

    let plan = args.plan();
    let cancel = CancelFlag::new();
    if plan.is_interruptible() {
        install_ctrlc_handler(&cancel)?;
    }

    let mut emitter = Emitter::new(sender, reporter, rand::thread_rng(), ThreadPacer).with_cancel(cancel);
    let summary = emitter.run(plan)?;
    tracing::debug!(
        hits = summary.hits_sent,
        states = summary.states_sent,
        interrupted = summary.interrupted,
        "run finished"
    );
    emitter.reporter_mut().line("\nFinished")?;
    Ok(())
}
