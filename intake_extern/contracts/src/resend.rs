use std::{collections::BTreeMap, future::Future};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ResendApiService: Send + Sync + 'static {
    /// Submit an email to the Resend API.
    ///
    /// Any success status is [`ResendSendResult::Sent`], rejections reported
    /// by Resend are returned as [`ResendSendResult::Rejected`] and transport
    /// failures as errors.
    fn send_email(
        &self,
        email: ResendEmail,
    ) -> impl Future<Output = anyhow::Result<ResendSendResult>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub content: ResendContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendContent {
    Text(String),
    /// A template stored at Resend, rendered with the given variables.
    Template {
        id: String,
        variables: BTreeMap<String, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendSendResult {
    /// `id` is missing if the response body could not be read.
    Sent { id: Option<String> },
    Rejected { message: String },
}

#[cfg(feature = "mock")]
impl MockResendApiService {
    pub fn with_send_email(mut self, email: ResendEmail, result: ResendSendResult) -> Self {
        self.expect_send_email()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
