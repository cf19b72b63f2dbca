use std::sync::Arc;

use intake_di::Build;
use intake_email_contracts::{DispatchOutcome, Email, EmailContent, EmailService};
use intake_extern_contracts::resend::{
    ResendApiService, ResendContent, ResendEmail, ResendSendResult,
};
use intake_models::email_address::EmailAddressWithName;
use tracing::debug;

#[derive(Debug, Clone, Build)]
pub struct EmailServiceImpl<ResendApi> {
    resend_api: ResendApi,
    config: EmailServiceConfig,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    pub from: Arc<EmailAddressWithName>,
}

impl<ResendApi> EmailService for EmailServiceImpl<ResendApi>
where
    ResendApi: ResendApiService,
{
    async fn send(&self, email: Email) -> anyhow::Result<DispatchOutcome> {
        let email = ResendEmail {
            from: self.config.from.to_string(),
            to: email.recipients.iter().map(ToString::to_string).collect(),
            cc: email.cc.iter().map(ToString::to_string).collect(),
            reply_to: email.reply_to.map(|reply_to| reply_to.into_inner()),
            subject: email.subject,
            content: match email.content {
                EmailContent::Text(text) => ResendContent::Text(text),
                EmailContent::Template { id, variables } => {
                    ResendContent::Template { id, variables }
                }
            },
        };

        Ok(match self.resend_api.send_email(email).await? {
            ResendSendResult::Sent { id } => {
                debug!(?id, "email accepted by provider");
                DispatchOutcome::delivered()
            }
            ResendSendResult::Rejected { message } => DispatchOutcome::failed(message),
        })
    }
}
