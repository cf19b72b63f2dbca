use std::future::Future;

use intake_models::email_address::EmailAddress;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubscriptionService: Send + Sync + 'static {
    /// Add `email` to the newsletter audience.
    ///
    /// Enrolling an address that is already subscribed succeeds.
    fn enroll(
        &self,
        email: &EmailAddress,
    ) -> impl Future<Output = Result<(), SubscriptionEnrollError>> + Send;
}

#[derive(Debug, Error)]
pub enum SubscriptionEnrollError {
    #[error("The mailing list provider refused the email address.")]
    InvalidAddress,
    #[error("The mailing list provider could not enroll the email address.")]
    Failed { detail: Option<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockSubscriptionService {
    pub fn with_enroll(
        mut self,
        email: EmailAddress,
        result: Result<(), SubscriptionEnrollError>,
    ) -> Self {
        self.expect_enroll()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
