use crate::domain::model::{BoundingBox, EmailMessage, Location};
use crate::utils::error::{NotifierError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ISS_URL: &str = "http://api.open-notify.org/iss-now.json";
pub const DEFAULT_SUNRISE_SUNSET_URL: &str = "http://api.sunrise-sunset.org/json";
pub const DEFAULT_SUBJECT: &str = "ISS is flying over";
pub const DEFAULT_BODY: &str = "The International Space Station is currently soaring above your location.
If the sky is clear and it's dark enough, step outside
and look up - you might just catch a glimpse of it streaking across the heavens.
It's a rare and awe-inspiring sight, so don't miss the chance to spot humanity's outpost in orbit!";

/// Everything a single run needs besides the secrets. Every section is
/// optional in the file; missing values fall back to the Berlin/Gmail defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub location: LocationConfig,
    pub range: RangeConfig,
    pub endpoints: EndpointsConfig,
    pub smtp: SmtpConfig,
    pub message: MessageConfig,
    pub credentials: CredentialsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: Some("Berlin".to_string()),
            latitude: 52.51641820726436,
            longitude: 13.377693368816862,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub delta_degrees: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self { delta_degrees: 5.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub iss_url: String,
    pub sunrise_sunset_url: String,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            iss_url: DEFAULT_ISS_URL.to_string(),
            sunrise_sunset_url: DEFAULT_SUNRISE_SUNSET_URL.to_string(),
            request_timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 587,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub subject: String,
    pub body: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            body: DEFAULT_BODY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub env_file: String,
    pub sender_key: String,
    pub password_key: String,
    pub recipient_key: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            env_file: ".env".to_string(),
            sender_key: "EMAIL".to_string(),
            password_key: "APP_PASSWORD".to_string(),
            recipient_key: "SEND_TO".to_string(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NotifierError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NotifierError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SMTP_HOST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NotifierError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range("location.latitude", self.location.latitude, -90.0, 90.0)?;
        validation::validate_range("location.longitude", self.location.longitude, -180.0, 180.0)?;
        validation::validate_range("range.delta_degrees", self.range.delta_degrees, 0.0, 90.0)?;

        validation::validate_url("endpoints.iss_url", &self.endpoints.iss_url)?;
        validation::validate_url(
            "endpoints.sunrise_sunset_url",
            &self.endpoints.sunrise_sunset_url,
        )?;

        validation::validate_non_empty_string("smtp.host", &self.smtp.host)?;
        if self.smtp.port == 0 {
            return Err(NotifierError::InvalidConfigValueError {
                field: "smtp.port".to_string(),
                value: "0".to_string(),
                reason: "Port must be non-zero".to_string(),
            });
        }

        validation::validate_non_empty_string("message.subject", &self.message.subject)?;
        validation::validate_non_empty_string("credentials.sender_key", &self.credentials.sender_key)?;
        validation::validate_non_empty_string(
            "credentials.password_key",
            &self.credentials.password_key,
        )?;
        validation::validate_non_empty_string(
            "credentials.recipient_key",
            &self.credentials.recipient_key,
        )?;

        Ok(())
    }

    pub fn reference_location(&self) -> Location {
        Location::new(self.location.latitude, self.location.longitude)
    }

    pub fn location_name(&self) -> &str {
        self.location.name.as_deref().unwrap_or("your location")
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.reference_location().bounding_box(self.range.delta_degrees)
    }

    pub fn email_message(&self) -> EmailMessage {
        EmailMessage {
            subject: self.message.subject.clone(),
            body: self.message.body.clone(),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.endpoints.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
