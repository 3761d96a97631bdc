//! SMTP mail dispatch via `lettre`.
//!
//! Configuration comes from environment variables; when `SMTP_HOST`
//! is not set, [`SmtpConfig::from_env`] returns `None` and no mailer
//! is constructed; booking transitions then report `emailSent=false`.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};

use crate::booking::Notification;

/// Default SMTP port (STARTTLS)
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender when `SMTP_FROM` is not set
const DEFAULT_FROM_ADDRESS: &str = "Moon Restaurant <noreply@moon-restaurant.local>";

/// Mail dispatch failure; never fatal to the booking transition
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Email build error: {0}")]
    Build(String),
}

/// SMTP configuration
///
/// | 环境变量 | 必填 | 默认值 |
/// |----------|------|--------|
/// | SMTP_HOST | 是 | - |
/// | SMTP_PORT | 否 | 587 |
/// | SMTP_FROM | 否 | Moon Restaurant <noreply@moon-restaurant.local> |
/// | SMTP_USER | 否 | - |
/// | SMTP_PASSWORD | 否 | - |
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub from_address: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl SmtpConfig {
    /// Load from environment; `None` when `SMTP_HOST` is unset
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            user: std::env::var("SMTP_USER").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// Sends booking notifications over SMTP
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl Mailer {
    pub fn new(config: SmtpConfig) -> Result<Self, MailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(user), Some(password)) = (&config.user, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from_address: config.from_address,
        })
    }

    /// Dispatch one notification. The caller treats a failure as
    /// non-fatal and reports it via the `emailSent` flag.
    pub async fn send(&self, notification: &Notification) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(notification.to.parse()?)
            .subject(&notification.subject)
            .header(ContentType::TEXT_HTML)
            .body(notification.html_body.clone())
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport.send(email).await?;
        tracing::info!(to = %notification.to, subject = %notification.subject, "Notification email sent");
        Ok(())
    }
}
