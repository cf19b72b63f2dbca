use std::{net::IpAddr, sync::Arc};

use intake_di::Build;
use intake_extern_contracts::turnstile::TurnstileApiService;
use intake_models::contact::ChallengeToken;
use intake_shared_contracts::captcha::{CaptchaCheckError, CaptchaService};
use tracing::{debug, error};

#[derive(Debug, Clone, Build)]
pub struct CaptchaServiceImpl<TurnstileApi> {
    turnstile_api: TurnstileApi,
    config: CaptchaServiceConfig,
}

#[derive(Debug, Clone)]
pub struct CaptchaServiceConfig {
    pub secret: Arc<str>,
}

impl<TurnstileApi> CaptchaService for CaptchaServiceImpl<TurnstileApi>
where
    TurnstileApi: TurnstileApiService,
{
    async fn check(
        &self,
        token: &ChallengeToken,
        remote_ip: Option<IpAddr>,
    ) -> Result<(), CaptchaCheckError> {
        let response = self
            .turnstile_api
            .siteverify(token, &self.config.secret, remote_ip)
            .await
            .map_err(|err| {
                error!("Failed to verify challenge response: {err:#}");
                CaptchaCheckError::Failed
            })?;

        if !response.success {
            debug!(error_codes = ?response.error_codes, "challenge response rejected");
            return Err(CaptchaCheckError::Failed);
        }

        Ok(())
    }
}
