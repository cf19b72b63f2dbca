use std::{collections::BTreeMap, sync::Arc};

use intake_core_contact_contracts::notification::ContactNotificationService;
use intake_di::Build;
use intake_email_contracts::{DispatchOutcome, Email, EmailContent, EmailService};
use intake_models::{
    contact::Submission, email_address::EmailAddressWithName, language::LanguageCode,
};
use intake_utils::trace_instrument;

const PHONE_NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, Build)]
pub struct ContactNotificationServiceImpl<Email> {
    email: Email,
    config: ContactNotificationConfig,
}

#[derive(Debug, Clone)]
pub struct ContactNotificationConfig {
    /// Staff distribution list.
    pub to: Arc<[EmailAddressWithName]>,
    pub cc: Arc<[EmailAddressWithName]>,
    /// Sole recipient of filtered messages.
    pub oversight: Arc<EmailAddressWithName>,
    pub subject: Arc<str>,
    /// Provider template used for messages to the staff.
    pub template_id: Arc<str>,
}

impl<EmailS> ContactNotificationService for ContactNotificationServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    #[trace_instrument(skip(self, submission))]
    async fn send_full(&self, submission: &Submission) -> anyhow::Result<DispatchOutcome> {
        let variables = [
            ("name", submission.name.to_string()),
            ("email", submission.email.to_string()),
            ("phone", phone(submission).into()),
            ("message", submission.message.to_string()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect::<BTreeMap<_, _>>();

        let email = Email {
            recipients: self.config.to.to_vec(),
            cc: self.config.cc.to_vec(),
            subject: self.config.subject.to_string(),
            content: EmailContent::Template {
                id: self.config.template_id.to_string(),
                variables,
            },
            reply_to: Some(submission.email.clone()),
        };

        self.email.send(email).await
    }

    #[trace_instrument(skip(self, submission))]
    async fn send_filtered(
        &self,
        submission: &Submission,
        language: &LanguageCode,
    ) -> anyhow::Result<DispatchOutcome> {
        let body = format!(
            "This message was filtered as non-English (detected: {language}).\n\n\
             Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
            *submission.name,
            submission.email,
            phone(submission),
            *submission.message,
        );

        let email = Email {
            recipients: vec![(*self.config.oversight).clone()],
            cc: Vec::new(),
            subject: format!("[Filtered: {language}] {}", self.config.subject),
            content: EmailContent::Text(body),
            reply_to: Some(submission.email.clone()),
        };

        self.email.send(email).await
    }
}

fn phone(submission: &Submission) -> &str {
    submission
        .phone
        .as_deref()
        .map_or(PHONE_NOT_PROVIDED, String::as_str)
}
