use log::{debug, error};

use crate::{ContactClient, ContactRequest};

pub const SUCCESS_NOTIFICATION: &str = "Thank you for your message! 🐾\n\nWe've received your inquiry and will get back to you within 24 hours. Your support means the world to us!";
pub const FAILURE_FALLBACK: &str = "Failed to send your message. Please try again.";
pub const CONNECTIVITY_ERROR: &str =
    "We couldn't reach our server. Please check your connection and try again.";

/// The form the user is filling in. Values are read on every submit.
pub trait ContactForm {
    fn read_fields(&self) -> ContactRequest;
    fn reset(&mut self);
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
    ConnectivityError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected,
    Unreachable,
}

pub async fn submit_form<F: ContactForm, N: Notifier>(
    client: &ContactClient,
    form: &mut F,
    notifier: &N,
) -> SubmitOutcome {
    let request = form.read_fields();
    debug!("Submitting contact form to {}", client.endpoint());

    match client.send(&request).await {
        Ok(reply) if reply.success => {
            notifier.notify(Notification::Success(SUCCESS_NOTIFICATION.to_string()));
            form.reset();
            SubmitOutcome::Sent
        }
        Ok(reply) => {
            let message = reply
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FAILURE_FALLBACK.to_string());
            notifier.notify(Notification::Failure(message));
            SubmitOutcome::Rejected
        }
        Err(e) => {
            error!("Contact form submission failed: {:?}", e);
            notifier.notify(Notification::ConnectivityError(
                CONNECTIVITY_ERROR.to_string(),
            ));
            SubmitOutcome::Unreachable
        }
    }
}
