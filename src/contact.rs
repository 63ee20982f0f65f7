use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const SUCCESS_TITLE: &str = "Message sent!";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message. I'll get back to you soon.";
pub const REJECTED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_MESSAGE: &str = "Network error. Please try again.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject is required")]
    MissingSubject,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameTooShort => Field::Name,
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::MissingSubject => Field::Subject,
            ValidationError::MessageTooShort => Field::Message,
        }
    }
}

impl ContactMessage {
    /// Checks every field, reporting all failures at once.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.name.trim().chars().count() < 2 {
            errors.push(ValidationError::NameTooShort);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(ValidationError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            errors.push(ValidationError::MissingSubject);
        }
        if self.message.trim().chars().count() < 10 {
            errors.push(ValidationError::MessageTooShort);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// First validation message for `field`, if any.
pub fn field_error(errors: &[ValidationError], field: Field) -> Option<ValidationError> {
    errors.iter().copied().find(|e| e.field() == field)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("invalid contact message: {0:?}")]
    Invalid(Vec<ValidationError>),
    #[error("contact relay access key is not configured")]
    NotConfigured,
    #[error("contact relay request failed: {0}")]
    Transport(String),
    #[error("contact relay rejected the message: status={status}")]
    Rejected { status: u16 },
}

impl ContactError {
    /// What the visitor sees in the failure notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::Transport(_) => NETWORK_MESSAGE,
            _ => REJECTED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: Option<String>,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_URL.to_string(),
            access_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("CONTACT_RELAY_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());

        let access_key = lookup("CONTACT_ACCESS_KEY").filter(|s| !s.trim().is_empty());

        let timeout = lookup("CONTACT_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            endpoint,
            access_key,
            timeout,
        }
    }

    /// Form fields sent to the relay, in the order it documents them.
    pub fn form_fields(
        &self,
        message: &ContactMessage,
    ) -> Result<[(&'static str, String); 5], ContactError> {
        let access_key = self.access_key.clone().ok_or(ContactError::NotConfigured)?;
        Ok([
            ("access_key", access_key),
            ("name", message.name.trim().to_string()),
            ("email", message.email.trim().to_string()),
            ("subject", message.subject.trim().to_string()),
            ("message", message.message.trim().to_string()),
        ])
    }
}

#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct RelayClient {
    config: RelayConfig,
    http: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl RelayClient {
    pub fn new(config: RelayConfig) -> Result<Self, ContactError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("portfolio-site/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Validates `message` and posts it to the relay once.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        message.validate().map_err(ContactError::Invalid)?;
        let fields = self.config.form_fields(message)?;
        let form = fields
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            });

        let resp = self
            .http
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "contact message relayed");
            Ok(())
        } else {
            tracing::warn!(status = status.as_u16(), "contact relay rejected message");
            Err(ContactError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn valid() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I'd like to talk about a project.".to_string(),
        }
    }

    #[test]
    fn test_valid_message_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_each_rule_reported_independently() {
        let msg = ContactMessage {
            name: "A".to_string(),
            ..valid()
        };
        assert_eq!(msg.validate(), Err(vec![ValidationError::NameTooShort]));

        let msg = ContactMessage {
            subject: "   ".to_string(),
            ..valid()
        };
        assert_eq!(msg.validate(), Err(vec![ValidationError::MissingSubject]));

        let msg = ContactMessage {
            message: "too short".to_string(),
            ..valid()
        };
        assert_eq!(msg.validate(), Err(vec![ValidationError::MessageTooShort]));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactMessage::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::NameTooShort,
                ValidationError::InvalidEmail,
                ValidationError::MissingSubject,
                ValidationError::MessageTooShort,
            ]
        );
        assert_eq!(
            field_error(&errors, Field::Email).map(|e| e.to_string()),
            Some("Please enter a valid email address".to_string())
        );
    }

    #[test]
    fn test_email_shapes() {
        for good in ["a@b.co", "first.last+tag@mail.example.org", " padded@x.io "] {
            let msg = ContactMessage {
                email: good.to_string(),
                ..valid()
            };
            assert_eq!(msg.validate(), Ok(()), "{good}");
        }
        for bad in ["", "plain", "a@b", "a@@b.com", "a b@c.com", "@b.com", "a@.com", "a@b."] {
            let msg = ContactMessage {
                email: bad.to_string(),
                ..valid()
            };
            assert_eq!(
                msg.validate(),
                Err(vec![ValidationError::InvalidEmail]),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_field_error_absent_for_valid_field() {
        let errors = vec![ValidationError::MessageTooShort];
        assert_eq!(field_error(&errors, Field::Name), None);
        assert_eq!(
            field_error(&errors, Field::Message),
            Some(ValidationError::MessageTooShort)
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = RelayConfig::from_lookup(|_| None);
        assert_eq!(config, RelayConfig::default());
        assert_eq!(config.endpoint, DEFAULT_RELAY_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_from_lookup() {
        let env = HashMap::from([
            ("CONTACT_RELAY_URL", "http://localhost:9000/submit"),
            ("CONTACT_ACCESS_KEY", "secret"),
            ("CONTACT_TIMEOUT_SECS", "3"),
        ]);
        let config = RelayConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.endpoint, "http://localhost:9000/submit");
        assert_eq!(config.access_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_config_ignores_blank_and_garbage() {
        let env = HashMap::from([
            ("CONTACT_ACCESS_KEY", "  "),
            ("CONTACT_TIMEOUT_SECS", "soon"),
        ]);
        let config = RelayConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.access_key, None);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_form_fields_order_and_trimming() {
        let config = RelayConfig {
            access_key: Some("key".to_string()),
            ..RelayConfig::default()
        };
        let msg = ContactMessage {
            name: "  Ada ".to_string(),
            ..valid()
        };
        let fields = config.form_fields(&msg).unwrap();
        let names = fields.iter().map(|(n, _)| *n).collect::<Vec<_>>();
        assert_eq!(names, vec!["access_key", "name", "email", "subject", "message"]);
        assert_eq!(fields[0].1, "key");
        assert_eq!(fields[1].1, "Ada");
    }

    #[test]
    fn test_form_fields_without_key() {
        assert_eq!(
            RelayConfig::default().form_fields(&valid()),
            Err(ContactError::NotConfigured)
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ContactError::Transport("timed out".to_string()).user_message(),
            NETWORK_MESSAGE
        );
        assert_eq!(
            ContactError::Rejected { status: 500 }.user_message(),
            REJECTED_MESSAGE
        );
        assert_eq!(ContactError::NotConfigured.user_message(), REJECTED_MESSAGE);
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_send_rejects_invalid_before_network() {
        let client = RelayClient::new(RelayConfig {
            endpoint: "http://127.0.0.1:9/unreachable".to_string(),
            access_key: Some("key".to_string()),
            ..RelayConfig::default()
        })
        .unwrap();
        let err = client.send(&ContactMessage::default()).await.unwrap_err();
        assert!(matches!(err, ContactError::Invalid(errors) if errors.len() == 4));
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_send_without_key_is_not_configured() {
        let client = RelayClient::new(RelayConfig::default()).unwrap();
        assert_eq!(
            client.send(&valid()).await,
            Err(ContactError::NotConfigured)
        );
    }

    #[cfg(feature = "ssr")]
    async fn relay_answering(status: axum::http::StatusCode) -> RelayClient {
        use axum::{routing::post, Router};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/submit", post(move || async move { status }));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        RelayClient::new(RelayConfig {
            endpoint: format!("http://{addr}/submit"),
            access_key: Some("key".to_string()),
            ..RelayConfig::default()
        })
        .unwrap()
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_send_success() {
        let client = relay_answering(axum::http::StatusCode::OK).await;
        assert_eq!(client.send(&valid()).await, Ok(()));
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_send_rejected_status() {
        let client = relay_answering(axum::http::StatusCode::INTERNAL_SERVER_ERROR).await;
        let err = client.send(&valid()).await.unwrap_err();
        assert_eq!(err, ContactError::Rejected { status: 500 });
        assert_eq!(err.user_message(), REJECTED_MESSAGE);
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_send_unreachable_relay() {
        // bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RelayClient::new(RelayConfig {
            endpoint: format!("http://{addr}/submit"),
            access_key: Some("key".to_string()),
            ..RelayConfig::default()
        })
        .unwrap();
        let err = client.send(&valid()).await.unwrap_err();
        assert!(matches!(err, ContactError::Transport(_)));
        assert_eq!(err.user_message(), NETWORK_MESSAGE);
    }
}
