//! SMTP realisation of the contact `MessageSink`, using lettre.

use async_trait::async_trait;
use folio_contact::{ContactMessage, MessageSink};
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::config::SmtpConfig;

/// Delivers contact messages to the site owner's inbox over SMTP.
pub struct SmtpSink {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpSink {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mailer = if config.username.is_empty() && config.password.is_empty() {
            // Local development mode (e.g. MailDev), no authentication
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            let credentials =
                Credentials::new(config.username.clone(), config.password.clone());
            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(credentials)
                .build()
        };

        let from: Mailbox = format!("{} <{}>", config.from_name, config.from_email).parse()?;
        let to: Mailbox = config.to_email.parse()?;

        Ok(Self { mailer, from, to })
    }
}

#[async_trait]
impl MessageSink for SmtpSink {
    async fn send(&self, message: &ContactMessage) -> Result<(), String> {
        let reply_to: Mailbox = format!("{} <{}>", message.name, message.email)
            .parse()
            .map_err(|e| format!("invalid sender address: {e}"))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(reply_to)
            .subject(format!("Portfolio contact from {}", message.name))
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| format!("failed to build email: {e}"))?;

        self.mailer
            .send(&email)
            .map_err(|e| format!("failed to send email: {e}"))?;

        info!(from = %message.email, "contact message relayed over SMTP");
        Ok(())
    }
}
