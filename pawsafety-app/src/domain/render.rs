use crate::domain::contact::ValidContact;

pub const SENDER_DISPLAY_NAME: &str = "PawSafety Website";
pub const SUBJECT_PREFIX: &str = "🐾 New Contact Form: ";

/// A rendered contact email. Sender and recipient are owned by the transport
/// adapter, so only the submission-dependent parts live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    pub reply_to: Option<String>,
}

pub fn render_contact_email(contact: &ValidContact) -> ContactEmail {
    ContactEmail {
        subject: format!("{}{}", SUBJECT_PREFIX, contact.subject),
        html_body: render_html(contact),
        text_body: render_text(contact),
        reply_to: Some(contact.email.clone()),
    }
}

fn render_html(contact: &ValidContact) -> String {
    let message = escape_html(&contact.message)
        .replace("\r\n", "\n")
        .replace('\n', "<br>");
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #ff6b6b;">New Contact Form Submission</h2>
    <div style="background: #f8f9fa; padding: 20px; border-radius: 10px;">
        <p><strong>Name:</strong> {name}</p>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Phone:</strong> {phone}</p>
        <p><strong>Subject:</strong> {subject}</p>
        <p><strong>Message:</strong></p>
        <div style="background: white; padding: 15px; border-radius: 5px; border-left: 4px solid #ff6b6b;">
            {message}
        </div>
    </div>
    <p style="color: #666; font-size: 12px; margin-top: 20px;">
        This message was sent from the PawSafety website contact form.
    </p>
</div>
"#,
        name = escape_html(&contact.name),
        email = escape_html(&contact.email),
        phone = escape_html(contact.phone_or_default()),
        subject = escape_html(&contact.subject),
        message = message,
    )
}

fn render_text(contact: &ValidContact) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\nSubject: {}\n\nMessage:\n{}\n",
        contact.name,
        contact.email,
        contact.phone_or_default(),
        contact.subject,
        contact.message
    )
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::{DEFAULT_SUBJECT, PHONE_NOT_PROVIDED};

    fn contact() -> ValidContact {
        ValidContact {
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            phone: None,
            subject: DEFAULT_SUBJECT.to_string(),
            message: "Can I volunteer?\nWeekends only.".to_string(),
        }
    }

    #[test]
    fn test_subject_uses_prefix() {
        let email = render_contact_email(&contact());
        assert_eq!(email.subject, "🐾 New Contact Form: General Inquiry");
    }

    #[test]
    fn test_bodies_contain_all_fields() {
        let email = render_contact_email(&contact());
        for body in [&email.html_body, &email.text_body] {
            assert!(body.contains("Asha"));
            assert!(body.contains("a@x.com"));
            assert!(body.contains(PHONE_NOT_PROVIDED));
            assert!(body.contains(DEFAULT_SUBJECT));
        }
        assert!(email.text_body.contains("Can I volunteer?\nWeekends only."));
        assert_eq!(email.reply_to.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_html_preserves_line_breaks() {
        let email = render_contact_email(&contact());
        assert!(email.html_body.contains("Can I volunteer?<br>Weekends only."));
    }

    #[test]
    fn test_html_escapes_user_input() {
        let mut c = contact();
        c.name = "<script>alert(1)</script>".to_string();
        let email = render_contact_email(&c);
        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("&lt;script&gt;"));
        assert!(email.text_body.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_phone_is_rendered_when_present() {
        let mut c = contact();
        c.phone = Some("555-0100".to_string());
        let email = render_contact_email(&c);
        assert!(email.text_body.contains("Phone: 555-0100"));
        assert!(!email.text_body.contains(PHONE_NOT_PROVIDED));
    }
}
