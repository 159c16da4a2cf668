//! Per-identity sliding-window rate limiting.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use termsim_types::error::{Result, ShellError};

/// Sliding-window request ledger.
///
/// Each identity gets its own queue of accepted request times, created on
/// first use and pruned to the window on every check.
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_requests: usize,
    ledger: HashMap<String, VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            window,
            max_requests,
            ledger: HashMap::new(),
        }
    }

    /// Record a request for `identity` now, or reject it.
    pub fn check(&mut self, identity: &str) -> Result<()> {
        self.check_at(identity, Instant::now())
    }

    /// Record a request for `identity` at `now`, or reject it.
    ///
    /// Rejected requests are not recorded.
    pub fn check_at(&mut self, identity: &str, now: Instant) -> Result<()> {
        let window = self.window;
        let times = self.ledger.entry(identity.to_string()).or_default();
        while times
            .front()
            .is_some_and(|t| now.saturating_duration_since(*t) >= window)
        {
            times.pop_front();
        }
        if times.len() >= self.max_requests {
            let retry = times
                .front()
                .map(|oldest| window.saturating_sub(now.saturating_duration_since(*oldest)))
                .unwrap_or(window);
            log::warn!("rate limit hit for {identity}");
            return Err(ShellError::RateLimited(retry.as_secs().max(1)));
        }
        times.push_back(now);
        Ok(())
    }

    /// Requests currently counted against `identity`.
    pub fn in_window(&self, identity: &str) -> usize {
        self.ledger.get(identity).map_or(0, VecDeque::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleventh_call_rejected() {
        let mut rl = RateLimiter::new(Duration::from_secs(60), 10);
        let t0 = Instant::now();
        for i in 0..10 {
            assert!(rl.check_at("alice", t0 + Duration::from_secs(i)).is_ok());
        }
        match rl.check_at("alice", t0 + Duration::from_secs(10)) {
            Err(ShellError::RateLimited(secs)) => assert_eq!(secs, 50),
            other => panic!("expected RateLimited, got {other:?}"),
        }
        assert_eq!(rl.in_window("alice"), 10);
    }

    #[test]
    fn identities_are_independent() {
        let mut rl = RateLimiter::new(Duration::from_secs(60), 1);
        let t0 = Instant::now();
        rl.check_at("alice", t0).unwrap();
        assert!(rl.check_at("alice", t0).is_err());
        assert!(rl.check_at("bob", t0).is_ok());
    }

    #[test]
    fn window_slides() {
        let mut rl = RateLimiter::new(Duration::from_secs(60), 2);
        let t0 = Instant::now();
        rl.check_at("a", t0).unwrap();
        rl.check_at("a", t0 + Duration::from_secs(30)).unwrap();
        assert!(rl.check_at("a", t0 + Duration::from_secs(59)).is_err());
        assert!(rl.check_at("a", t0 + Duration::from_secs(60)).is_ok());
        assert_eq!(rl.in_window("a"), 2);
    }

    #[test]
    fn unknown_identity_has_empty_window() {
        let rl = RateLimiter::new(Duration::from_secs(60), 10);
        assert_eq!(rl.in_window("nobody"), 0);
    }
}
