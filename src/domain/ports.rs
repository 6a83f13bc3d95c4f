use crate::domain::model::{Credentials, EmailMessage, IssPosition, Location, SunTimes};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Anything that can hand over the three mail secrets.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn load(&self) -> Result<Credentials>;
}

#[async_trait]
pub trait IssLocator: Send + Sync {
    async fn current_position(&self) -> Result<IssPosition>;
}

#[async_trait]
pub trait SunTimesOracle: Send + Sync {
    async fn sun_times(&self, location: Location) -> Result<SunTimes>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, credentials: &Credentials, message: &EmailMessage) -> Result<()>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
