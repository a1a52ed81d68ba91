use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use thiserror::Error;

use crate::domain::render::ContactEmail;

pub trait EmailPort {
    /// Dispatches the email to the configured inbox. Implementations must not retry.
    fn send_email(&self, email: &ContactEmail) -> Result<(), SendEmailError>;

    /// Checks that the transport can reach and authenticate with the provider.
    fn verify_connection(&self) -> Result<(), SendEmailError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendEmailError {
    #[error("Failed to build email: {0}")]
    InvalidEmail(String),
    #[error("Failed to send email: {0}")]
    Transport(String),
}

#[derive(Clone, Default)]
pub struct MockEmailPort {
    sent_emails: Arc<Mutex<Vec<ContactEmail>>>,
    attempts: Arc<Mutex<usize>>,
    failing: Arc<AtomicBool>,
}

#[allow(unused)]
impl MockEmailPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn get_sent_emails(&self) -> Vec<ContactEmail> {
        self.sent_emails.lock().unwrap().clone()
    }

    pub fn get_attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl EmailPort for MockEmailPort {
    fn send_email(&self, email: &ContactEmail) -> Result<(), SendEmailError> {
        *self.attempts.lock().unwrap() += 1;
        if self.failing.load(Ordering::SeqCst) {
            return Err(SendEmailError::Transport(
                "connection refused by mock transport".to_string(),
            ));
        }
        self.sent_emails.lock().unwrap().push(email.clone());
        Ok(())
    }

    fn verify_connection(&self) -> Result<(), SendEmailError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SendEmailError::Transport(
                "mock transport unavailable".to_string(),
            ));
        }
        Ok(())
    }
}
