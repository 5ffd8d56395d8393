//! Test emitter for the plate synth's OSC input. Builds `/hit` and `/state`
//! messages from one of five generation strategies and fires them over UDP,
//! standing in for the particle application during receiver testing.

pub mod cli;
pub mod error;
pub mod event;
pub mod general;
pub mod generator;
pub mod io;
pub mod modes;
pub mod remote;

pub use error::EmitError;
pub use event::{HitEvent, StateEvent, Surface};
pub use modes::{Emitter, ModePlan};
