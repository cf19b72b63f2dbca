use std::future::Future;

use intake_email_contracts::DispatchOutcome;
use intake_models::{contact::Submission, language::LanguageCode};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactNotificationService: Send + Sync + 'static {
    /// Send the submission to the staff distribution list.
    fn send_full(
        &self,
        submission: &Submission,
    ) -> impl Future<Output = anyhow::Result<DispatchOutcome>> + Send;

    /// Send the submission to the oversight address only, marked with the
    /// detected language.
    fn send_filtered(
        &self,
        submission: &Submission,
        language: &LanguageCode,
    ) -> impl Future<Output = anyhow::Result<DispatchOutcome>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactNotificationService {
    pub fn with_send_full(mut self, submission: Submission, result: DispatchOutcome) -> Self {
        self.expect_send_full()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_full_error(mut self, submission: Submission) -> Self {
        self.expect_send_full()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "email provider unreachable"
                ))))
            });
        self
    }

    pub fn with_send_filtered(
        mut self,
        submission: Submission,
        language: LanguageCode,
        result: DispatchOutcome,
    ) -> Self {
        self.expect_send_filtered()
            .once()
            .with(
                mockall::predicate::eq(submission),
                mockall::predicate::eq(language),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_filtered_error(mut self, submission: Submission, language: LanguageCode) -> Self {
        self.expect_send_filtered()
            .once()
            .with(
                mockall::predicate::eq(submission),
                mockall::predicate::eq(language),
            )
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "email provider unreachable"
                ))))
            });
        self
    }
}
