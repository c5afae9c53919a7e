use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW: Duration = Duration::from_millis(60_000);
pub const DEFAULT_MAX_SUBMISSIONS: u32 = 3;

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum submissions allowed in the window
    pub max_submissions: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_submissions: DEFAULT_MAX_SUBMISSIONS,
            window: DEFAULT_WINDOW,
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_submissions: u32, window: Duration) -> Self {
        Self {
            max_submissions,
            window,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window.as_millis() as u64
    }
}

/**
* Throttles score submissions with a sliding window anchored to the most
* recent submission. Recording inside an active window restarts the full
* window, so the throttled period stretches when submissions arrive near
* its edge.
*
* Never reads a clock: every operation takes `now_ms` from the caller.
*/
#[derive(Debug, Default)]
pub struct RateLimiter {
    config: RateLimitConfig,
    last_submission_ms: Option<u64>,
    count: u32,
    limited: bool,
    time_until_reset: Duration,
}

/// Read-only view of the limiter for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSnapshot {
    pub last_submission_ms: Option<u64>,
    pub submission_count: u32,
    pub limited: bool,
    pub time_until_reset: Duration,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        RateLimiter {
            config,
            ..Default::default()
        }
    }

    /// Whether a new submission may proceed to validation. An inadmissible
    /// state is a normal outcome, not an error.
    pub fn is_admitted(&self, now_ms: u64) -> bool {
        let Some(last) = self.last_submission_ms else {
            return true;
        };
        if now_ms.saturating_sub(last) > self.config.window_ms() {
            return true;
        }
        self.count < self.config.max_submissions
    }

    /// Called only once a submission has been fully accepted downstream.
    pub fn record_submission(&mut self, now_ms: u64) {
        match self.last_submission_ms {
            Some(last) if now_ms.saturating_sub(last) <= self.config.window_ms() => {
                self.count += 1;
            }
            _ => {
                self.count = 1;
            }
        }
        self.last_submission_ms = Some(now_ms);
        self.recompute(now_ms);
        debug!(
            "submission recorded at {now_ms}ms, {} in window",
            self.count
        );
    }

    /// Periodic refresh of the derived fields. Clears the counter once the
    /// window has fully elapsed; authoritative state is untouched otherwise.
    pub fn tick(&mut self, now_ms: u64) {
        let Some(last) = self.last_submission_ms else {
            return;
        };
        if now_ms.saturating_sub(last) > self.config.window_ms() {
            if self.limited {
                debug!("rate limit window expired at {now_ms}ms");
            }
            self.count = 0;
        }
        self.recompute(now_ms);
    }

    pub fn snapshot(&self) -> RateLimitSnapshot {
        RateLimitSnapshot {
            last_submission_ms: self.last_submission_ms,
            submission_count: self.count,
            limited: self.limited,
            time_until_reset: self.time_until_reset,
        }
    }

    fn recompute(&mut self, now_ms: u64) {
        let remaining_ms = self
            .last_submission_ms
            .map(|last| {
                let elapsed = now_ms.saturating_sub(last);
                self.config.window_ms().saturating_sub(elapsed)
            })
            .unwrap_or(0);

        self.time_until_reset = Duration::from_millis(remaining_ms);
        self.limited = remaining_ms > 0 && self.count >= self.config.max_submissions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max: u32, window_ms: u64) -> RateLimiter {
        RateLimiter::new(RateLimitConfig::new(max, Duration::from_millis(window_ms)))
    }

    #[test]
    fn admits_before_any_submission() {
        let limiter = RateLimiter::default();
        assert!(limiter.is_admitted(0));
        assert!(!limiter.snapshot().limited);
        assert_eq!(limiter.snapshot().time_until_reset, Duration::ZERO);
    }

    #[test]
    fn fourth_submission_blocked_until_window_elapses_from_the_last() {
        let mut limiter = limiter(3, 60_000);
        limiter.record_submission(0);
        limiter.record_submission(1_000);
        limiter.record_submission(2_000);

        assert!(!limiter.is_admitted(2_010));
        // 60s after the *first* submission, still inside the window of the third
        assert!(!limiter.is_admitted(60_001));
        // exactly at the window edge of the third submission
        assert!(!limiter.is_admitted(62_000));
        assert!(limiter.is_admitted(62_001));
    }

    #[test]
    fn counter_restarts_after_a_quiet_window() {
        let mut limiter = limiter(3, 60_000);
        limiter.record_submission(0);
        limiter.record_submission(70_000);
        assert_eq!(limiter.snapshot().submission_count, 1);
    }

    #[test]
    fn recording_near_the_edge_extends_the_throttle() {
        let mut limiter = limiter(2, 60_000);
        limiter.record_submission(0);
        limiter.record_submission(59_999);
        assert!(limiter.snapshot().limited);
        // the window re-anchored to 59_999, so the full duration remains
        assert_eq!(
            limiter.snapshot().time_until_reset,
            Duration::from_millis(60_000)
        );
        assert!(!limiter.is_admitted(60_001));
    }

    #[test]
    fn tick_refreshes_countdown_without_touching_the_count() {
        let mut limiter = limiter(1, 60_000);
        limiter.record_submission(0);
        limiter.tick(10);

        let snapshot = limiter.snapshot();
        assert_eq!(snapshot.submission_count, 1);
        assert!(snapshot.limited);
        assert_eq!(snapshot.time_until_reset, Duration::from_millis(59_990));
    }

    #[test]
    fn tick_clears_state_once_the_window_expires() {
        let mut limiter = limiter(3, 60_000);
        limiter.record_submission(0);
        limiter.record_submission(10);
        limiter.record_submission(20);
        assert!(limiter.snapshot().limited);

        limiter.tick(60_021);
        let snapshot = limiter.snapshot();
        assert_eq!(snapshot.submission_count, 0);
        assert!(!snapshot.limited);
        assert_eq!(snapshot.time_until_reset, Duration::ZERO);
    }
}
