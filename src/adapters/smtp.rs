use crate::config::toml_config::SmtpConfig;
use crate::domain::model::{Credentials, EmailMessage};
use crate::domain::ports::Notifier;
use crate::utils::error::{NotifierError, Result};
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Sends the notification through an SMTP relay with STARTTLS.
#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    host: String,
    port: u16,
}

impl SmtpNotifier {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn from_config(config: &SmtpConfig) -> Self {
        Self::new(config.host.clone(), config.port)
    }

    pub fn build_message(credentials: &Credentials, message: &EmailMessage) -> Result<Message> {
        let from: Mailbox = credentials.sender.parse()?;
        let to: Mailbox = credentials.recipient.parse()?;

        Ok(Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())?)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, credentials: &Credentials, message: &EmailMessage) -> Result<()> {
        let email = Self::build_message(credentials, message)?;

        // The transport owns the connection; it is closed when this scope ends.
        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
                .port(self.port)
                .credentials(SmtpCredentials::new(
                    credentials.sender.clone(),
                    credentials.password.clone(),
                ))
                .build();

        tracing::debug!(
            "Sending mail via {}:{} to {}",
            self.host,
            self.port,
            credentials.recipient
        );
        let response = mailer.send(email).await?;

        if !response.is_positive() {
            return Err(NotifierError::MailError {
                message: format!("SMTP server replied {}", response.code()),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::DEFAULT_BODY;

    fn credentials(sender: &str) -> Credentials {
        Credentials {
            sender: sender.to_string(),
            password: "app-password".to_string(),
            recipient: "observer@example.com".to_string(),
        }
    }

    fn message() -> EmailMessage {
        EmailMessage {
            subject: "ISS is flying over".to_string(),
            body: DEFAULT_BODY.to_string(),
        }
    }

    #[test]
    fn test_build_plain_text_message() {
        let email = SmtpNotifier::build_message(&credentials("sender@example.com"), &message())
            .unwrap();
        let raw = String::from_utf8(email.formatted()).unwrap();

        assert!(raw.contains("Subject: ISS is flying over"));
        assert!(raw.contains("From: sender@example.com"));
        assert!(raw.contains("To: observer@example.com"));
        assert!(raw.contains("Content-Type: text/plain"));
    }

    #[test]
    fn test_invalid_sender_is_mail_error() {
        let result = SmtpNotifier::build_message(&credentials("not an address"), &message());
        assert!(matches!(result, Err(NotifierError::MailError { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_mail_error() {
        // nothing listens on port 1
        let notifier = SmtpNotifier::new("127.0.0.1", 1);
        let result = notifier
            .notify(&credentials("sender@example.com"), &message())
            .await;

        assert!(matches!(result, Err(NotifierError::MailError { .. })));
    }

    #[test]
    fn test_from_config() {
        let notifier = SmtpNotifier::from_config(&SmtpConfig::default());
        assert_eq!(notifier.host, "smtp.gmail.com");
        assert_eq!(notifier.port, 587);
    }
}
