//! Fixed-window request rate limiting.
//!
//! Counters live in process memory, keyed by client address, with one limiter
//! instance per rate-limited endpoint. Known weaknesses, kept on purpose for
//! this deployment size: the window is fixed rather than sliding, so a burst
//! straddling a window boundary can reach twice the nominal rate; counters are
//! per-process, so horizontally scaled deployments each enforce their own
//! limit (a global limit needs a shared counter store); and clients whose
//! forwarded address was stripped by a proxy, or that sit behind one NAT
//! address, share a single bucket.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

/// Per-endpoint limiter settings: at most `max_requests` per `window_millis`.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_millis: i64,
}

impl RateLimitConfig {
    /// Default budget for registration lookups: 10 requests per 10 seconds.
    pub fn lookup_default() -> Self {
        Self {
            max_requests: 10,
            window_millis: 10_000,
        }
    }

    /// Default budget for attendance confirmation: 10 requests per 30 seconds.
    pub fn attendance_default() -> Self {
        Self {
            max_requests: 10,
            window_millis: 30_000,
        }
    }
}

struct Window {
    count: u32,
    started_at: DateTime<Utc>,
}

/// An in-memory fixed-window request counter keyed by client address.
pub struct RateLimiter {
    config: RateLimitConfig,
    state: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    /// Creates a new instance of [`RateLimiter`]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            state: Mutex::new(HashMap::new()),
        }
    }

    /// Check whether a request from `client_key` at `now` fits the budget.
    ///
    /// A request landing outside the current window resets the window. An
    /// allowed request is counted; a rejected one is not, so the stored count
    /// never exceeds `max_requests`. The caller supplies `now`, which keeps
    /// the limiter deterministic under test.
    pub fn allow(&self, client_key: &str, now: DateTime<Utc>) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        match state.get_mut(client_key) {
            Some(window)
                if (now - window.started_at).num_milliseconds() < self.config.window_millis =>
            {
                if window.count >= self.config.max_requests {
                    return false;
                }

                window.count += 1;
                true
            }
            _ => {
                state.insert(
                    client_key.to_string(),
                    Window {
                        count: 1,
                        started_at: now,
                    },
                );
                true
            }
        }
    }
}
