use crate::domain::{DeadLetterQueue, Error};

/// Reports rejected operations as `tracing` warnings.
#[derive(Default, Debug)]
pub struct TracingDlq {}

impl DeadLetterQueue for TracingDlq {
    fn report(&self, error: &Error) {
        tracing::warn!(%error, "operation rejected");
    }
}
