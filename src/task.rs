//! Stale Completion Guard
//!
//! Async completions (catalog fetch, file reads) can resolve after the state
//! they were meant for has moved on: the component unmounted, or the draft
//! was resynced to a different product. Each launch captures a token; the
//! completion is applied only while that token is still current. Everything
//! runs on the single UI thread; the atomic is only there because the
//! reactive runtime's cleanup hooks require `Send + Sync`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Token captured when an async operation is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskToken(u64);

/// Generation counter shared between a component and its in-flight tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskGuard {
    generation: Arc<AtomicU64>,
}

impl TaskGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for the current generation.
    pub fn issue(&self) -> TaskToken {
        TaskToken(self.generation.load(Ordering::Relaxed))
    }

    /// Invalidate every outstanding token and return a fresh one.
    ///
    /// Called on resync, on unmount, and when a newer operation supersedes
    /// an in-flight one.
    pub fn supersede(&self) -> TaskToken {
        self.generation.fetch_add(1, Ordering::Relaxed);
        self.issue()
    }

    /// Whether a completion carrying `token` may still be applied.
    pub fn accepts(&self, token: TaskToken) -> bool {
        token == self.issue()
    }
}
