use std::sync::Arc;

use log::{error, info};
use thiserror::Error;

use crate::{
    domain::{
        contact::{ContactSubmission, InvalidSubmission},
        render::render_contact_email,
    },
    ports::email::{EmailPort, SendEmailError},
};

pub trait SubmitContactUseCase {
    fn submit(&self, submission: ContactSubmission) -> Result<(), SubmitContactError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    MissingRequiredFields(#[from] InvalidSubmission),
    #[error(transparent)]
    Dispatch(#[from] SendEmailError),
}

pub struct SubmitContactUseCaseImpl<E: EmailPort> {
    email_port: Arc<E>,
}

impl<E: EmailPort> SubmitContactUseCaseImpl<E> {
    pub fn new(email_port: Arc<E>) -> Self {
        Self { email_port }
    }
}

impl<E: EmailPort> SubmitContactUseCase for SubmitContactUseCaseImpl<E> {
    fn submit(&self, submission: ContactSubmission) -> Result<(), SubmitContactError> {
        let contact = match submission.into_valid() {
            Ok(contact) => contact,
            Err(e) => {
                info!("Rejected contact submission: {}", e);
                return Err(e.into());
            }
        };

        let email = render_contact_email(&contact);
        if let Err(e) = self.email_port.send_email(&email) {
            error!("Error sending contact email from {}: {}", contact.email, e);
            return Err(e.into());
        }

        info!("Contact email sent for {} <{}>", contact.name, contact.email);
        Ok(())
    }
}
