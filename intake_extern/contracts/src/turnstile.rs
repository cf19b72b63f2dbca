use std::{future::Future, net::IpAddr};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TurnstileApiService: Send + Sync + 'static {
    /// Validate a challenge response token issued by Cloudflare Turnstile.
    fn siteverify(
        &self,
        response: &str,
        secret: &str,
        remote_ip: Option<IpAddr>,
    ) -> impl Future<Output = anyhow::Result<TurnstileSiteverifyResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnstileSiteverifyResponse {
    pub success: bool,
    pub error_codes: Vec<String>,
}

#[cfg(feature = "mock")]
impl MockTurnstileApiService {
    pub fn with_siteverify(
        mut self,
        response: String,
        secret: String,
        remote_ip: Option<IpAddr>,
        result: TurnstileSiteverifyResponse,
    ) -> Self {
        self.expect_siteverify()
            .once()
            .with(
                mockall::predicate::eq(response),
                mockall::predicate::eq(secret),
                mockall::predicate::eq(remote_ip),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_siteverify_error(mut self, response: String) -> Self {
        self.expect_siteverify()
            .once()
            .with(
                mockall::predicate::eq(response),
                mockall::predicate::always(),
                mockall::predicate::always(),
            )
            .return_once(|_, _, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "siteverify endpoint unreachable"
                ))))
            });
        self
    }
}
