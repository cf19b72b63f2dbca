use std::net::IpAddr;

use intake_core_contact_contracts::{
    notification::ContactNotificationService, ContactFeatureService, ContactReceipt,
    ContactRoute, ContactSubmitError, SubscriptionStatus,
};
use intake_di::Build;
use intake_models::{
    contact::{ChallengeToken, ContactForm, Submission, SUBSCRIBE_MARKER},
    email_address::EmailAddress,
};
use intake_shared_contracts::{
    captcha::{CaptchaCheckError, CaptchaService},
    language::LanguageService,
    subscription::SubscriptionService,
};
use intake_utils::trace_instrument;
use tracing::{error, info, warn};

pub mod notification;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<Captcha, Language, ContactNotification, Subscription> {
    captcha: Captcha,
    language: Language,
    contact_notification: ContactNotification,
    subscription: Subscription,
}

impl<Captcha, Language, ContactNotification, Subscription> ContactFeatureService
    for ContactFeatureServiceImpl<Captcha, Language, ContactNotification, Subscription>
where
    Captcha: CaptchaService,
    Language: LanguageService,
    ContactNotification: ContactNotificationService,
    Subscription: SubscriptionService,
{
    #[trace_instrument(skip(self, form))]
    async fn submit(
        &self,
        form: ContactForm,
        remote_ip: Option<IpAddr>,
    ) -> Result<ContactReceipt, ContactSubmitError> {
        let submission = parse_submission(form)?;

        self.captcha
            .check(&submission.challenge_token, remote_ip)
            .await
            .map_err(|CaptchaCheckError::Failed| ContactSubmitError::VerificationFailed)?;

        let classification = self.language.classify(&submission.message);

        if !classification.is_english {
            info!(
                event = "non_english_filtered",
                detected_language = %classification.top_language,
                message_length = submission.message.chars().count(),
                "contact message filtered as non-English"
            );

            // best effort: the sender is never told about filtering
            let delivered = match self
                .contact_notification
                .send_filtered(&submission, &classification.top_language)
                .await
            {
                Ok(outcome) if outcome.delivered => true,
                Ok(outcome) => {
                    error!(
                        error_detail = outcome.error_detail.as_deref(),
                        "Failed to deliver filtered contact message"
                    );
                    false
                }
                Err(err) => {
                    error!("Failed to deliver filtered contact message: {err:#}");
                    false
                }
            };

            return Ok(ContactReceipt {
                route: ContactRoute::Filtered {
                    language: classification.top_language,
                    delivered,
                },
                subscription: if submission.subscribe_requested {
                    SubscriptionStatus::Skipped
                } else {
                    SubscriptionStatus::NotRequested
                },
            });
        }

        // gating: delivery failure ends the request
        let outcome = self.contact_notification.send_full(&submission).await?;
        if !outcome.delivered {
            error!(
                error_detail = outcome.error_detail.as_deref(),
                "Failed to deliver contact message"
            );
            return Err(ContactSubmitError::Send);
        }

        // best effort: enrollment never changes the response
        let subscription = if !submission.subscribe_requested {
            SubscriptionStatus::NotRequested
        } else {
            match self.subscription.enroll(&submission.email).await {
                Ok(()) => SubscriptionStatus::Enrolled,
                Err(err) => {
                    warn!("Failed to enroll contact sender in newsletter: {err:#}");
                    SubscriptionStatus::Failed
                }
            }
        };

        Ok(ContactReceipt {
            route: ContactRoute::Full,
            subscription,
        })
    }
}

/// Validates the raw form in the order the errors are reported: required
/// fields, email address shape, challenge token.
fn parse_submission(form: ContactForm) -> Result<Submission, ContactSubmitError> {
    let non_empty = |field: Option<String>| field.filter(|x| !x.is_empty());

    let (Some(name), Some(email), Some(message)) = (
        non_empty(form.name),
        non_empty(form.email),
        non_empty(form.message),
    ) else {
        return Err(ContactSubmitError::MissingFields);
    };

    let email = EmailAddress::try_new(email).map_err(|_| ContactSubmitError::InvalidEmail)?;

    let challenge_token = non_empty(form.challenge_token)
        .and_then(|token| ChallengeToken::try_new(token).ok())
        .ok_or(ContactSubmitError::MissingChallenge)?;

    Ok(Submission {
        name: name
            .try_into()
            .map_err(|_| ContactSubmitError::MissingFields)?,
        email,
        phone: non_empty(form.phone).and_then(|phone| phone.try_into().ok()),
        message: message
            .try_into()
            .map_err(|_| ContactSubmitError::MissingFields)?,
        subscribe_requested: form.subscribe.as_deref() == Some(SUBSCRIBE_MARKER),
        challenge_token,
    })
}
