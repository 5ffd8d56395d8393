use std::io;

use thiserror::Error;

/// Errors raised while setting up or driving the emitter.
#[derive(Error, Debug)]
pub enum EmitError {
    /// The destination `host:port` could not be resolved.
    #[error("cannot resolve {target}: {source}")]
    Resolve {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Resolution succeeded but yielded no address.
    #[error("no address found for {target}")]
    NoAddress { target: String },

    /// The local UDP socket could not be created.
    #[error("cannot bind local UDP socket: {0}")]
    Bind(#[source] io::Error),

    #[error("OSC encode failed: {0}")]
    Encode(#[from] rosc::OscError),

    /// A datagram could not be handed to the OS. Never fatal for a run.
    #[error("send to {target} failed: {source}")]
    Send {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}
