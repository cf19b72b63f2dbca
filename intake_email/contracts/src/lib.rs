use std::{collections::BTreeMap, future::Future};

use intake_models::email_address::{EmailAddress, EmailAddressWithName};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hand the email over to the transactional email provider.
    ///
    /// A rejection by the provider is not an error, it is reported through
    /// the returned [`DispatchOutcome`].
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<DispatchOutcome>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipients: Vec<EmailAddressWithName>,
    pub cc: Vec<EmailAddressWithName>,
    pub subject: String,
    pub content: EmailContent,
    pub reply_to: Option<EmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailContent {
    Text(String),
    /// A template managed by the provider.
    Template {
        id: String,
        variables: BTreeMap<String, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub delivered: bool,
    /// The provider's explanation of a failed delivery. For logging only.
    pub error_detail: Option<String>,
}

impl DispatchOutcome {
    pub fn delivered() -> Self {
        Self {
            delivered: true,
            error_detail: None,
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            delivered: false,
            error_detail: Some(detail.into()),
        }
    }
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: DispatchOutcome) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, email: Email) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "email provider unreachable"
                ))))
            });
        self
    }
}
