//! Tests for the submission flow against a mocked relay.

use std::sync::Mutex;

use mockito::{Matcher, Server};
use pawsafety_client::{
    ContactClient, ContactRequest,
    form::{
        CONNECTIVITY_ERROR, ContactForm, FAILURE_FALLBACK, Notification, Notifier,
        SUCCESS_NOTIFICATION, SubmitOutcome, submit_form,
    },
};
use serde_json::json;

struct TestForm {
    fields: ContactRequest,
    resets: usize,
}

impl TestForm {
    fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            fields: ContactRequest {
                name: name.to_string(),
                email: email.to_string(),
                phone: String::new(),
                subject: String::new(),
                message: message.to_string(),
            },
            resets: 0,
        }
    }
}

impl ContactForm for TestForm {
    fn read_fields(&self) -> ContactRequest {
        self.fields.clone()
    }

    fn reset(&mut self) {
        self.resets += 1;
        self.fields = ContactRequest::default();
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

impl RecordingNotifier {
    fn get(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn test_success_resets_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/contact")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "name": "Asha",
            "email": "a@x.com",
            "phone": "",
            "subject": "",
            "message": "Can I volunteer?"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"success": true, "message": "Thank you! Your message has been sent successfully."})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = ContactClient::new(server.url());
    let mut form = TestForm::new("Asha", "a@x.com", "Can I volunteer?");
    let notifier = RecordingNotifier::default();

    let outcome = submit_form(&client, &mut form, &notifier).await;

    mock.assert_async().await;
    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(form.resets, 1);
    assert_eq!(form.fields, ContactRequest::default());
    assert_eq!(
        notifier.get(),
        vec![Notification::Success(SUCCESS_NOTIFICATION.to_string())]
    );
}

#[tokio::test]
async fn test_rejection_keeps_form_and_shows_server_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/contact")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"success": false, "message": "Name, email, and message are required fields."})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = ContactClient::new(format!("{}/", server.url()));
    let mut form = TestForm::new("", "a@x.com", "hi");
    let notifier = RecordingNotifier::default();

    let outcome = submit_form(&client, &mut form, &notifier).await;

    mock.assert_async().await;
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(form.resets, 0);
    assert_eq!(form.fields.email, "a@x.com");
    assert_eq!(
        notifier.get(),
        vec![Notification::Failure(
            "Name, email, and message are required fields.".to_string()
        )]
    );
}

#[tokio::test]
async fn test_failure_without_message_uses_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/contact")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(json!({"success": false}).to_string())
        .create_async()
        .await;

    let client = ContactClient::new(server.url());
    let mut form = TestForm::new("Asha", "a@x.com", "hi");
    let notifier = RecordingNotifier::default();

    assert_eq!(
        submit_form(&client, &mut form, &notifier).await,
        SubmitOutcome::Rejected
    );
    assert_eq!(
        notifier.get(),
        vec![Notification::Failure(FAILURE_FALLBACK.to_string())]
    );
}

#[tokio::test]
async fn test_malformed_reply_is_a_connectivity_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/contact")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let client = ContactClient::new(server.url());
    let mut form = TestForm::new("Asha", "a@x.com", "hi");
    let notifier = RecordingNotifier::default();

    assert_eq!(
        submit_form(&client, &mut form, &notifier).await,
        SubmitOutcome::Unreachable
    );
    assert_eq!(form.resets, 0);
    assert_eq!(
        notifier.get(),
        vec![Notification::ConnectivityError(CONNECTIVITY_ERROR.to_string())]
    );
}

#[tokio::test]
async fn test_unreachable_relay_is_a_connectivity_error() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client = ContactClient::new("http://127.0.0.1:9");
    let mut form = TestForm::new("Asha", "a@x.com", "hi");
    let notifier = RecordingNotifier::default();

    assert_eq!(
        submit_form(&client, &mut form, &notifier).await,
        SubmitOutcome::Unreachable
    );
    assert_eq!(form.resets, 0);
    assert_eq!(notifier.get().len(), 1);
}

#[tokio::test]
async fn test_each_submit_is_one_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/contact")
        .with_status(200)
        .with_body(json!({"success": true, "message": "ok"}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = ContactClient::new(server.url());
    let notifier = RecordingNotifier::default();
    for _ in 0..2 {
        let mut form = TestForm::new("Asha", "a@x.com", "hi");
        submit_form(&client, &mut form, &notifier).await;
    }

    mock.assert_async().await;
    assert_eq!(notifier.get().len(), 2);
}
