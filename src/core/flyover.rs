use crate::config::toml_config::AppConfig;
use crate::core::predicates::{is_dark_at, is_in_box};
use crate::domain::model::RunOutcome;
use crate::domain::ports::{Clock, CredentialSource, IssLocator, Notifier, SunTimesOracle};
use crate::utils::error::Result;

/// One pass of "is the ISS overhead and is it dark here?".
pub struct FlyoverCheck<K, I, S, N, C>
where
    K: CredentialSource,
    I: IssLocator,
    S: SunTimesOracle,
    N: Notifier,
    C: Clock,
{
    config: AppConfig,
    credentials: K,
    locator: I,
    oracle: S,
    notifier: N,
    clock: C,
    dry_run: bool,
}

impl<K, I, S, N, C> FlyoverCheck<K, I, S, N, C>
where
    K: CredentialSource,
    I: IssLocator,
    S: SunTimesOracle,
    N: Notifier,
    C: Clock,
{
    pub fn new(config: AppConfig, credentials: K, locator: I, oracle: S, notifier: N, clock: C) -> Self {
        Self {
            config,
            credentials,
            locator,
            oracle,
            notifier,
            clock,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run_once(&self) -> Result<RunOutcome> {
        let credentials = self.credentials.load().await?;
        tracing::debug!("Loaded credentials: {:?}", credentials);

        let reference = self.config.reference_location();
        let sun_times = self.oracle.sun_times(reference).await?;
        let now = self.clock.now();
        let is_dark = is_dark_at(&sun_times, now);
        tracing::info!(
            "{}: sunrise {}, sunset {}, now {} -> dark: {}",
            self.config.location_name(),
            sun_times.sunrise.to_rfc3339(),
            sun_times.sunset.to_rfc3339(),
            now.to_rfc3339(),
            is_dark
        );

        let position = self.locator.current_position().await?;
        let in_range = is_in_box(position.location, &self.config.bounding_box());
        tracing::info!(
            "ISS at ({:.4}, {:.4}) as of {} -> in range: {}",
            position.location.latitude,
            position.location.longitude,
            position
                .timestamp
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string()),
            in_range
        );

        if !(is_dark && in_range) {
            tracing::info!("No notification sent.");
            return Ok(RunOutcome::NotSent { is_dark, in_range });
        }

        if self.dry_run {
            tracing::info!("🔍 Dry run: would notify {}", credentials.recipient);
            return Ok(RunOutcome::DryRun { is_dark, in_range });
        }

        match self
            .notifier
            .notify(&credentials, &self.config.email_message())
            .await
        {
            Ok(()) => {
                tracing::info!("Email sent!");
                Ok(RunOutcome::Notified)
            }
            Err(e) => {
                tracing::error!("Error sending email: {}", e);
                Ok(RunOutcome::NotificationFailed {
                    reason: e.to_string(),
                })
            }
        }
    }
}
