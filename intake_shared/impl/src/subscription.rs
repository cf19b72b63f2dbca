use intake_di::Build;
use intake_extern_contracts::mailchimp::{MailchimpAddMemberResult, MailchimpApiService};
use intake_models::email_address::EmailAddress;
use intake_shared_contracts::subscription::{SubscriptionEnrollError, SubscriptionService};
use tracing::debug;

#[derive(Debug, Clone, Build)]
pub struct SubscriptionServiceImpl<MailchimpApi> {
    mailchimp_api: MailchimpApi,
}

impl<MailchimpApi> SubscriptionService for SubscriptionServiceImpl<MailchimpApi>
where
    MailchimpApi: MailchimpApiService,
{
    async fn enroll(&self, email: &EmailAddress) -> Result<(), SubscriptionEnrollError> {
        match self.mailchimp_api.add_member(email).await? {
            MailchimpAddMemberResult::Added => Ok(()),
            MailchimpAddMemberResult::MemberExists => {
                debug!("address is already subscribed");
                Ok(())
            }
            MailchimpAddMemberResult::InvalidResource { detail } => {
                debug!(%detail, "mailing list provider refused the address");
                Err(SubscriptionEnrollError::InvalidAddress)
            }
            MailchimpAddMemberResult::Failed {
                status,
                title,
                detail,
            } => Err(SubscriptionEnrollError::Failed {
                detail: Some(format!(
                    "{status}: {}",
                    [title, detail]
                        .into_iter()
                        .flatten()
                        .collect::<Vec<_>>()
                        .join(" - ")
                )),
            }),
        }
    }
}
