pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{DotenvCredentials, OpenNotifyLocator, SmtpNotifier, SunriseSunsetOracle};
pub use crate::config::AppConfig;
pub use crate::core::{flyover::FlyoverCheck, time::SystemClock};
pub use crate::domain::model::RunOutcome;
pub use crate::utils::error::{NotifierError, Result};
