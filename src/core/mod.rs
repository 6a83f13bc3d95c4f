pub mod flyover;
pub mod predicates;
pub mod time;

pub use crate::domain::model::{Credentials, EmailMessage, IssPosition, Location, RunOutcome, SunTimes};
pub use crate::domain::ports::{Clock, CredentialSource, IssLocator, Notifier, SunTimesOracle};
pub use crate::utils::error::Result;
