use pawsafety_client::{
    ContactClient, ContactRequest,
    form::{ContactForm, Notification, Notifier, SubmitOutcome, submit_form},
};

struct ArgsForm {
    fields: ContactRequest,
}

impl ContactForm for ArgsForm {
    fn read_fields(&self) -> ContactRequest {
        self.fields.clone()
    }

    fn reset(&mut self) {
        self.fields = ContactRequest::default();
    }
}

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::Success(msg) => println!("{}", msg),
            Notification::Failure(msg) | Notification::ConnectivityError(msg) => {
                eprintln!("{}", msg)
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(name), Some(email), Some(message)) = (args.next(), args.next(), args.next()) else {
        eprintln!("Usage: pawsafety-client <name> <email> <message> [subject] [phone]");
        std::process::exit(2);
    };
    let subject = args.next().unwrap_or_default();
    let phone = args.next().unwrap_or_default();

    let relay_url =
        std::env::var("RELAY_URL").unwrap_or_else(|_| "http://localhost:5001".to_string());
    let client = ContactClient::new(relay_url);
    let mut form = ArgsForm {
        fields: ContactRequest {
            name,
            email,
            phone,
            subject,
            message,
        },
    };

    if submit_form(&client, &mut form, &ConsoleNotifier).await != SubmitOutcome::Sent {
        std::process::exit(1);
    }
}
