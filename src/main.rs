use clap::Parser;
use iss_notifier::adapters::http::build_client;
use iss_notifier::utils::error::ErrorCategory;
use iss_notifier::utils::{logger, validation::Validate};
use iss_notifier::{
    AppConfig, CliConfig, DotenvCredentials, FlyoverCheck, OpenNotifyLocator, RunOutcome,
    SmtpNotifier, SunriseSunsetOracle, SystemClock,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 載入配置
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match AppConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => AppConfig::default(),
    };

    if let Some(env_file) = cli.env_file.clone() {
        config.credentials.env_file = env_file;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let client = match build_client(config.request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Cannot build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    // 組裝 adapters 並執行一次
    let check = FlyoverCheck::new(
        config.clone(),
        DotenvCredentials::from_config(&config.credentials),
        OpenNotifyLocator::new(client.clone(), config.endpoints.iss_url.clone()),
        SunriseSunsetOracle::new(client, config.endpoints.sunrise_sunset_url.clone()),
        SmtpNotifier::from_config(&config.smtp),
        SystemClock,
    )
    .with_dry_run(cli.dry_run);

    match check.run_once().await {
        Ok(RunOutcome::NotificationFailed { reason }) => {
            tracing::warn!("Conditions met but the email could not be delivered: {}", reason);
        }
        Ok(outcome) => {
            tracing::info!(
                "Run finished: {:?} (conditions met: {})",
                outcome,
                outcome.conditions_met()
            );
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 根據錯誤類別決定退出碼；寄信失敗已在 run_once 內轉成 NotificationFailed
            let exit_code = match e.category() {
                ErrorCategory::Configuration => 1,
                ErrorCategory::Credentials | ErrorCategory::Upstream => 2,
                ErrorCategory::Delivery => 0,
            };
            std::process::exit(exit_code);
        }
    }
}
