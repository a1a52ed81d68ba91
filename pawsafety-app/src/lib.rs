use std::sync::Arc;

use crate::{
    ports::email::EmailPort,
    workflow::contact::submit::{SubmitContactUseCase, SubmitContactUseCaseImpl},
};

pub mod domain;
pub mod ports;
pub mod workflow;

pub struct Application {
    pub submit_contact_use_case: Box<dyn SubmitContactUseCase + Send + Sync + 'static>,
}

pub fn build_application<E: EmailPort + Send + Sync + 'static>(email_port: Arc<E>) -> Application {
    let submit_contact_use_case = Box::new(SubmitContactUseCaseImpl::new(email_port));

    Application {
        submit_contact_use_case,
    }
}
