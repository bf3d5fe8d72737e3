use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lazy_static::lazy_static;

/// Invocation counter shared by every calculator bound to it.
///
/// Increment/read/reset are individually atomic; no ordering is needed
/// between them and the sum computation, which is otherwise pure.
#[derive(Debug, Default)]
pub struct CallCounter {
    count: AtomicU64,
}

impl CallCounter {
    pub const fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
        }
    }

    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn current(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}

lazy_static! {
    static ref SHARED_COUNTER: Arc<CallCounter> = Arc::new(CallCounter::new());
}

/// The process-wide counter instance.
pub fn shared() -> Arc<CallCounter> {
    Arc::clone(&SHARED_COUNTER)
}
