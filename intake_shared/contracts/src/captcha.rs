use std::{future::Future, net::IpAddr};

use intake_models::contact::ChallengeToken;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CaptchaService: Send + Sync + 'static {
    /// Verify a challenge token solved by the visitor.
    ///
    /// Fails closed: a token that cannot be verified at all is treated like
    /// a rejected one.
    fn check(
        &self,
        token: &ChallengeToken,
        remote_ip: Option<IpAddr>,
    ) -> impl Future<Output = Result<(), CaptchaCheckError>> + Send;
}

#[derive(Debug, Error)]
pub enum CaptchaCheckError {
    #[error("The challenge response was rejected or could not be verified.")]
    Failed,
}

#[cfg(feature = "mock")]
impl MockCaptchaService {
    pub fn with_check(
        mut self,
        token: ChallengeToken,
        remote_ip: Option<IpAddr>,
        result: Result<(), CaptchaCheckError>,
    ) -> Self {
        self.expect_check()
            .once()
            .with(
                mockall::predicate::eq(token),
                mockall::predicate::eq(remote_ip),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
