use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::EmitError;

/// Shared "stop between sends" flag. Cloning shares the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Route Ctrl+C into `flag` instead of killing the process.
/// Can only succeed once per process.
pub fn install_ctrlc_handler(flag: &CancelFlag) -> Result<(), EmitError> {
    let flag = flag.clone();
    ctrlc::set_handler(move || {
        tracing::debug!("interrupt received");
        flag.cancel();
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let flag = CancelFlag::new();
        let other = flag.clone();
        assert!(!other.is_cancelled());
        flag.cancel();
        assert!(other.is_cancelled());
    }
}
