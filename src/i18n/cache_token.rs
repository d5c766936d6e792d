//! Per-request cache tokens.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static GLOBAL: CacheTokenSource = CacheTokenSource::new();

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Hands out time-derived tokens that strictly increase, even when several
/// are requested within the same millisecond.
#[derive(Debug)]
pub struct CacheTokenSource {
    last: AtomicU64,
    clock: fn() -> u64,
}

impl CacheTokenSource {
    pub const fn new() -> Self {
        Self::with_clock(unix_millis)
    }

    /// Use a custom millisecond clock.
    pub const fn with_clock(clock: fn() -> u64) -> Self {
        Self {
            last: AtomicU64::new(0),
            clock,
        }
    }

    /// Process-wide source shared by every loader.
    pub fn global() -> &'static CacheTokenSource {
        &GLOBAL
    }

    pub fn next_value(&self) -> u64 {
        let now = (self.clock)();
        let prev = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            }) {
            Ok(prev) | Err(prev) => prev,
        };
        now.max(prev + 1)
    }

    /// Next token rendered as a decimal string.
    pub fn next_token(&self) -> String {
        self.next_value().to_string()
    }
}

impl Default for CacheTokenSource {
    fn default() -> Self {
        Self::new()
    }
}
