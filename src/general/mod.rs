pub mod pacing;
pub mod shutdown;
pub mod stdin_handler;
