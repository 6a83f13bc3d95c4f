use crate::domain::ports::Clock;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Parse an ISO 8601 timestamp with an explicit offset and normalise it to UTC,
/// e.g. `2025-08-20T03:56:11+00:00`.
pub fn format_time(iso_time_str: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(iso_time_str.trim())?;
    Ok(parsed.with_timezone(&Utc))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
