use std::sync::atomic::{AtomicUsize, Ordering};

use business::domain::notification::CompletionNotifier;

/// Queues "shopping complete" signals until the presentation layer takes them.
#[derive(Debug, Default)]
pub struct SessionNotifier {
    pending: AtomicUsize,
}

impl SessionNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of signals raised since the last call.
    pub fn take(&self) -> usize {
        self.pending.swap(0, Ordering::SeqCst)
    }
}

impl CompletionNotifier for SessionNotifier {
    fn shopping_complete(&self, bought_count: usize) {
        tracing::info!(bought_count, "Shopping complete");
        self.pending.fetch_add(1, Ordering::SeqCst);
    }
}
