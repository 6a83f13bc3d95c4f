use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Flat box of `delta` degrees on each side of this location.
    pub fn bounding_box(&self, delta: f64) -> BoundingBox {
        BoundingBox {
            lat_range: (self.latitude - delta, self.latitude + delta),
            lng_range: (self.longitude - delta, self.longitude + delta),
        }
    }
}

/// Two independent closed intervals, `(min, max)` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_range: (f64, f64),
    pub lng_range: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IssPosition {
    pub location: Location,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    pub fn as_list(&self) -> [DateTime<Utc>; 2] {
        [self.sunrise, self.sunset]
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub sender: String,
    pub password: String,
    pub recipient: String,
}

// Keeps the app password out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("sender", &self.sender)
            .field("password", &"***")
            .field("recipient", &self.recipient)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Notified,
    NotificationFailed { reason: String },
    NotSent { is_dark: bool, in_range: bool },
    DryRun { is_dark: bool, in_range: bool },
}

impl RunOutcome {
    pub fn conditions_met(&self) -> bool {
        match self {
            RunOutcome::Notified | RunOutcome::NotificationFailed { .. } => true,
            RunOutcome::NotSent { is_dark, in_range } | RunOutcome::DryRun { is_dark, in_range } => {
                *is_dark && *in_range
            }
        }
    }
}
