//! Retry policy for polling a routing job

use std::time::Duration;

/// Default number of status polls before giving up
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default delay between status polls
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(2000);

/// How the delay grows between consecutive `Pending` observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backoff {
    /// Every delay equals the base delay
    #[default]
    Fixed,

    /// The base delay is multiplied by `factor` after each poll, up to `max_delay`
    Exponential { factor: u32, max_delay: Duration },
}

impl Backoff {
    /// Doubling backoff capped at `max_delay`
    pub fn exponential(max_delay: Duration) -> Self {
        Self::Exponential {
            factor: 2,
            max_delay,
        }
    }
}

/// Polling configuration for one route resolution
///
/// Owned by a single resolution; never shared across concurrent calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Status polls allowed while the job is pending (at least one poll always happens)
    pub max_retries: u32,
    /// Base delay between polls
    pub retry_delay: Duration,
    /// Growth of the delay across polls
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            backoff: Backoff::Fixed,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries,
            retry_delay,
            backoff: Backoff::Fixed,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Delay to wait after the `pending_seen`-th `Pending` observation
    ///
    /// `pending_seen` is 1-based. Exponential growth saturates instead of
    /// overflowing and never exceeds `max_delay`.
    pub fn delay_for(&self, pending_seen: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.retry_delay,
            Backoff::Exponential { factor, max_delay } => {
                let exponent = pending_seen.saturating_sub(1);
                let multiplier = factor.checked_pow(exponent).unwrap_or(u32::MAX);
                self.retry_delay
                    .checked_mul(multiplier)
                    .map_or(max_delay, |delay| delay.min(max_delay))
            }
        }
    }

    /// Whether another status poll is admitted after `pending_seen` pending results
    pub fn allows_poll(&self, pending_seen: u32) -> bool {
        pending_seen < self.max_retries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.retry_delay, Duration::from_millis(2000));
        assert_eq!(policy.backoff, Backoff::Fixed);
    }

    #[test]
    fn test_fixed_delay() {
        let policy = RetryPolicy::new(3, Duration::from_millis(250));
        assert_eq!(policy.delay_for(1), Duration::from_millis(250));
        assert_eq!(policy.delay_for(7), Duration::from_millis(250));
    }

    #[test]
    fn test_exponential_delay_is_capped() {
        let policy = RetryPolicy::default()
            .with_retry_delay(Duration::from_millis(500))
            .with_backoff(Backoff::exponential(Duration::from_secs(3)));

        assert_eq!(policy.delay_for(1), Duration::from_millis(500));
        assert_eq!(policy.delay_for(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(4), Duration::from_secs(3));
        assert_eq!(policy.delay_for(u32::MAX), Duration::from_secs(3));
    }

    #[test]
    fn test_allows_poll_bound() {
        let policy = RetryPolicy::default().with_max_retries(2);
        assert!(policy.allows_poll(0));
        assert!(policy.allows_poll(1));
        assert!(!policy.allows_poll(2));

        let none = RetryPolicy::default().with_max_retries(0);
        assert!(!none.allows_poll(0));
    }
}
