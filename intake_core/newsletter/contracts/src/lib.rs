use std::future::Future;

use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NewsletterFeatureService: Send + Sync + 'static {
    /// Subscribe the address entered in the newsletter form.
    fn subscribe(
        &self,
        email: Option<String>,
    ) -> impl Future<Output = Result<(), NewsletterSubscribeError>> + Send;
}

#[derive(Debug, Error)]
pub enum NewsletterSubscribeError {
    #[error("The email address is missing.")]
    MissingEmail,
    #[error("The email address is invalid.")]
    InvalidEmail,
    #[error("The mailing list provider could not enroll the email address.")]
    Failed,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockNewsletterFeatureService {
    pub fn with_subscribe(
        mut self,
        email: Option<String>,
        result: Result<(), NewsletterSubscribeError>,
    ) -> Self {
        self.expect_subscribe()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
