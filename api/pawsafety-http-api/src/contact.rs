use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::header,
};
use log::debug;
use pawsafety_app::{
    domain::contact::ContactSubmission, workflow::contact::submit::SubmitContactError,
};

use crate::{AppState, error::ApiError};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

#[derive(serde::Serialize, Debug)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Accepts the submission as JSON or as a urlencoded form post.
pub struct ContactPayload(pub ContactSubmission);

impl<S: Send + Sync> FromRequest<S> for ContactPayload {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(submission) = Form::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(|e| ApiError::InvalidBody(e.body_text()))?;
            return Ok(Self(submission));
        }

        let Json(submission) = Json::<ContactSubmission>::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()))?;
        Ok(Self(submission))
    }
}

pub async fn submit_contact(
    State(app_state): State<AppState>,
    ContactPayload(submission): ContactPayload,
) -> Result<Json<ContactResponse>, ApiError> {
    debug!("Received contact form submission: {:?}", submission);

    // The SMTP transport blocks, so dispatch runs off the async workers.
    let app = app_state.app.clone();
    let result = tokio::task::spawn_blocking(move || app.submit_contact_use_case.submit(submission))
        .await
        .map_err(|e| ApiError::Internal(format!("contact dispatch task failed: {}", e)))?;

    match result {
        Ok(()) => Ok(Json(ContactResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            error: None,
        })),
        Err(SubmitContactError::MissingRequiredFields(_)) => Err(ApiError::MissingRequiredFields),
        Err(SubmitContactError::Dispatch(e)) => Err(ApiError::Dispatch(e.to_string())),
    }
}
