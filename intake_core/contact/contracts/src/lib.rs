use std::{future::Future, net::IpAddr};

use intake_models::{contact::ContactForm, language::LanguageCode};
use thiserror::Error;

pub mod notification;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Process a contact form submission from verification to delivery.
    ///
    /// Messages that are not written in English are silently forwarded to
    /// the oversight address instead of the staff, and still reported as
    /// successful.
    fn submit(
        &self,
        form: ContactForm,
        remote_ip: Option<IpAddr>,
    ) -> impl Future<Output = Result<ContactReceipt, ContactSubmitError>> + Send;
}

/// What happened to an accepted submission. Never shown to the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub route: ContactRoute,
    pub subscription: SubscriptionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactRoute {
    /// Delivered to the staff distribution list.
    Full,
    /// Forwarded to the oversight address only.
    Filtered {
        language: LanguageCode,
        delivered: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    NotRequested,
    /// Requested, but not attempted because the message was filtered.
    Skipped,
    Enrolled,
    Failed,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Name, email address or message is missing.")]
    MissingFields,
    #[error("The email address is invalid.")]
    InvalidEmail,
    #[error("The challenge response is missing.")]
    MissingChallenge,
    #[error("The challenge response could not be verified.")]
    VerificationFailed,
    #[error("Failed to deliver the message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        form: ContactForm,
        remote_ip: Option<IpAddr>,
        result: Result<ContactReceipt, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(
                mockall::predicate::eq(form),
                mockall::predicate::eq(remote_ip),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
