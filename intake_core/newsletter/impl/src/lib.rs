use intake_core_newsletter_contracts::{NewsletterFeatureService, NewsletterSubscribeError};
use intake_di::Build;
use intake_models::email_address::EmailAddress;
use intake_shared_contracts::subscription::{SubscriptionEnrollError, SubscriptionService};
use intake_utils::trace_instrument;
use tracing::warn;

#[derive(Debug, Clone, Build)]
pub struct NewsletterFeatureServiceImpl<Subscription> {
    subscription: Subscription,
}

impl<Subscription> NewsletterFeatureService for NewsletterFeatureServiceImpl<Subscription>
where
    Subscription: SubscriptionService,
{
    #[trace_instrument(skip(self, email))]
    async fn subscribe(&self, email: Option<String>) -> Result<(), NewsletterSubscribeError> {
        let email = email
            .filter(|email| !email.is_empty())
            .ok_or(NewsletterSubscribeError::MissingEmail)?;
        let email =
            EmailAddress::try_new(email).map_err(|_| NewsletterSubscribeError::InvalidEmail)?;

        self.subscription
            .enroll(&email)
            .await
            .map_err(|err| match err {
                SubscriptionEnrollError::InvalidAddress => NewsletterSubscribeError::InvalidEmail,
                SubscriptionEnrollError::Failed { detail } => {
                    warn!(detail = detail.as_deref(), "Failed to enroll newsletter subscriber");
                    NewsletterSubscribeError::Failed
                }
                SubscriptionEnrollError::Other(err) => err.into(),
            })
    }
}
