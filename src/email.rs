use async_trait::async_trait;

/// Trait for sending emails. Implement this to integrate with an email
/// service (SMTP, SendGrid, SES, etc.).
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str, text: &str)
        -> Result<(), String>;
}

/// Development provider that logs emails instead of sending them.
pub struct ConsoleEmailProvider;

#[async_trait]
impl EmailProvider for ConsoleEmailProvider {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        _html: &str,
        text: &str,
    ) -> Result<(), String> {
        log::info!("[EMAIL] To: {} | Subject: {} | Body: {}", to, subject, text);
        Ok(())
    }
}

/// Link the invited user follows to land on the invite acceptance page.
pub fn invite_url(app_url: &str, invite_id: &str) -> String {
    format!("{}/invites/{}", app_url.trim_end_matches('/'), invite_id)
}

/// Subject, plain-text and HTML bodies for an invite email.
pub fn invite_message(invite_url: &str) -> (String, String, String) {
    let subject = "You're invited to join a trip on MYTH!".to_string();
    let text = format!(
        "You have been invited to join a trip! Click here to accept: {}",
        invite_url
    );
    let html = format!(
        "<p>You have been invited to join a trip! Click <a href=\"{}\">here</a> to accept.</p>",
        invite_url
    );
    (subject, text, html)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records sends instead of delivering anything.
    pub struct MockEmailProvider {
        pub sent: Arc<Mutex<Vec<(String, String)>>>,
        pub fail: bool,
    }

    impl MockEmailProvider {
        pub fn new() -> (Self, Arc<Mutex<Vec<(String, String)>>>) {
            let sent = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    sent: sent.clone(),
                    fail: false,
                },
                sent,
            )
        }
    }

    #[async_trait]
    impl EmailProvider for MockEmailProvider {
        async fn send(
            &self,
            to: &str,
            subject: &str,
            _html: &str,
            _text: &str,
        ) -> Result<(), String> {
            if self.fail {
                return Err("mock failure".to_string());
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn console_provider_send_is_ok() {
        let provider = ConsoleEmailProvider;
        let result = provider
            .send("user@example.com", "Subject", "<p>hi</p>", "hi")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn mock_provider_records_sends() {
        let (provider, sent) = MockEmailProvider::new();
        provider.send("a@b.com", "Sub", "", "text").await.unwrap();
        let messages = sent.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, "a@b.com");
    }

    #[tokio::test]
    async fn mock_provider_can_fail() {
        let (mut provider, sent) = MockEmailProvider::new();
        provider.fail = true;
        let result = provider.send("a@b.com", "Sub", "", "text").await;
        assert!(result.is_err());
        assert!(sent.lock().unwrap().is_empty());
    }

    #[test]
    fn invite_url_joins_cleanly() {
        assert_eq!(
            invite_url("https://myth.app", "abc-123"),
            "https://myth.app/invites/abc-123"
        );
        assert_eq!(
            invite_url("https://myth.app/", "abc-123"),
            "https://myth.app/invites/abc-123"
        );
    }

    #[test]
    fn invite_message_contains_link() {
        let url = "https://myth.app/invites/xyz";
        let (subject, text, html) = invite_message(url);
        assert!(subject.contains("MYTH"));
        assert!(text.contains(url));
        assert!(html.contains(url));
    }
}
