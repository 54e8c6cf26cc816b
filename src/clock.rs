//! Clock sources used to sample "now"

use chrono::{DateTime, Utc};

/// Supplies the current instant on demand
pub trait ClockSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Device wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Wall-clock reading taken once, then advanced by the tokio monotonic clock.
///
/// Immune to wall-clock jumps after construction and follows paused tokio time
/// in tests.
#[derive(Debug, Clone, Copy)]
pub struct AnchoredClock {
    wall: DateTime<Utc>,
    base: tokio::time::Instant,
}

impl AnchoredClock {
    pub fn new(wall: DateTime<Utc>) -> Self {
        Self {
            wall,
            base: tokio::time::Instant::now(),
        }
    }

    /// Anchor at the current device time
    pub fn from_system() -> Self {
        Self::new(Utc::now())
    }
}

impl ClockSource for AnchoredClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = self.base.elapsed();
        match chrono::Duration::from_std(elapsed) {
            Ok(elapsed) => self.wall + elapsed,
            Err(_) => self.wall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn anchored_clock_follows_tokio_time() {
        let wall = DateTime::parse_from_rfc3339("2025-04-30T10:00:00Z")
            .expect("timestamp")
            .with_timezone(&Utc);
        let clock = AnchoredClock::new(wall);
        assert_eq!(clock.now(), wall);

        tokio::time::advance(Duration::from_millis(2500)).await;
        assert_eq!(clock.now(), wall + chrono::Duration::milliseconds(2500));
    }
}
