use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MailchimpApiService: Send + Sync + 'static {
    /// Add `email` to the configured audience with status `subscribed`.
    fn add_member(
        &self,
        email: &str,
    ) -> impl Future<Output = anyhow::Result<MailchimpAddMemberResult>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailchimpAddMemberResult {
    Added,
    /// The address is already part of the audience.
    MemberExists,
    /// Mailchimp refused the address itself, e.g. because it looks fake.
    InvalidResource { detail: String },
    Failed {
        status: u16,
        title: Option<String>,
        detail: Option<String>,
    },
}

#[cfg(feature = "mock")]
impl MockMailchimpApiService {
    pub fn with_add_member(mut self, email: String, result: MailchimpAddMemberResult) -> Self {
        self.expect_add_member()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_add_member_error(mut self, email: String) -> Self {
        self.expect_add_member()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "mailchimp unreachable"
                ))))
            });
        self
    }
}
