use std::{fmt::Display, str::FromStr, time::Duration};

use lettre::{
    Address, Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::{SmtpTransportBuilder, authentication::Credentials},
};
use log::{debug, warn};
use pawsafety_app::{
    domain::render::{ContactEmail, SENDER_DISPLAY_NAME},
    ports::email::{EmailPort, SendEmailError},
};
use thiserror::Error;

/// Bounds connect, greeting and command waits so a hung provider cannot stall
/// the startup check or a request for long.
pub const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub host: String,
    pub user: String,
    pub password: String,
    pub recipient: String,
}

#[derive(Debug, Error)]
pub enum EmailAdapterError {
    #[error("Invalid sender address '{0}': {1}")]
    InvalidSender(String, String),
    #[error("Invalid recipient address '{0}': {1}")]
    InvalidRecipient(String, String),
    #[error("Failed to create SMTP transport: {0}")]
    Transport(String),
}

/// Connection check run once at startup.
pub trait VerifyTransport {
    fn verify(&self) -> Result<(), String>;
}

impl VerifyTransport for SmtpTransport {
    fn verify(&self) -> Result<(), String> {
        match self.test_connection() {
            Ok(true) => Ok(()),
            Ok(false) => Err("SMTP server did not accept the connection".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[cfg(test)]
impl VerifyTransport for lettre::transport::stub::StubTransport {
    fn verify(&self) -> Result<(), String> {
        Ok(())
    }
}

pub struct LettreEmailAdapter<T = SmtpTransport> {
    transport: T,
    from: Mailbox,
    to: Mailbox,
}

impl LettreEmailAdapter<SmtpTransport> {
    /// Builds the pooled SMTP transport. No connection is opened until the first
    /// send or an explicit [`EmailPort::verify_connection`].
    pub fn new(settings: &EmailSettings) -> Result<Self, EmailAdapterError> {
        let builder = SmtpTransport::relay(&settings.host)
            .map_err(|e| EmailAdapterError::Transport(e.to_string()))?;
        let transport = build_transport(builder, settings, SMTP_TIMEOUT);
        Self::with_transport(transport, &settings.user, &settings.recipient)
    }
}

fn build_transport(
    builder: SmtpTransportBuilder,
    settings: &EmailSettings,
    timeout: Duration,
) -> SmtpTransport {
    builder
        .credentials(Credentials::new(
            settings.user.clone(),
            settings.password.clone(),
        ))
        .timeout(Some(timeout))
        .build()
}

impl<T> LettreEmailAdapter<T> {
    pub fn with_transport(
        transport: T,
        sender: &str,
        recipient: &str,
    ) -> Result<Self, EmailAdapterError> {
        let sender_address = Address::from_str(sender)
            .map_err(|e| EmailAdapterError::InvalidSender(sender.to_string(), e.to_string()))?;
        let to = Mailbox::from_str(recipient)
            .map_err(|e| EmailAdapterError::InvalidRecipient(recipient.to_string(), e.to_string()))?;
        Ok(Self {
            transport,
            from: Mailbox::new(Some(SENDER_DISPLAY_NAME.to_string()), sender_address),
            to,
        })
    }

    #[cfg(test)]
    fn transport(&self) -> &T {
        &self.transport
    }

    fn build_message(&self, email: &ContactEmail) -> Result<Message, SendEmailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject.clone());
        if let Some(reply_to) = &email.reply_to {
            match Mailbox::from_str(reply_to) {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => warn!("Omitting Reply-To, '{}' is not a mailbox: {}", reply_to, e),
            }
        }
        builder
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))
            .map_err(|e| SendEmailError::InvalidEmail(e.to_string()))
    }
}

impl<T> EmailPort for LettreEmailAdapter<T>
where
    T: Transport + VerifyTransport,
    T::Error: Display,
{
    fn send_email(&self, email: &ContactEmail) -> Result<(), SendEmailError> {
        let message = self.build_message(email)?;
        self.transport
            .send(&message)
            .map_err(|e| SendEmailError::Transport(e.to_string()))?;
        debug!("Email '{}' handed to transport", email.subject);
        Ok(())
    }

    fn verify_connection(&self) -> Result<(), SendEmailError> {
        self.transport.verify().map_err(SendEmailError::Transport)
    }
}
