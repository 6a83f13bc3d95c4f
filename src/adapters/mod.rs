// Adapters layer: concrete implementations of the domain ports (http, smtp, dotenv).

pub mod credentials;
pub mod http;
pub mod iss_api;
pub mod smtp;
pub mod sun_api;

pub use credentials::DotenvCredentials;
pub use iss_api::OpenNotifyLocator;
pub use smtp::SmtpNotifier;
pub use sun_api::SunriseSunsetOracle;
