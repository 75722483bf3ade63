use std::sync::Arc;

/// Observable upload progress: percentage updates while the request body is
/// being transmitted, then a single completion signal once the request has
/// resolved (success or failure).
pub trait ProgressSinkPort: Send + Sync {
    fn report(&self, percent: u8);
    fn finish(&self);
}

pub type DynProgressSinkPort = Arc<dyn ProgressSinkPort>;
