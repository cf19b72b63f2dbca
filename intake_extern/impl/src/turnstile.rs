use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use intake_di::Build;
use intake_extern_contracts::turnstile::{TurnstileApiService, TurnstileSiteverifyResponse};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

/// https://developers.cloudflare.com/turnstile/get-started/server-side-validation/
const SITEVERIFY_ENDPOINT: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

#[derive(Debug, Clone, Build)]
pub struct TurnstileApiServiceImpl {
    config: TurnstileApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct TurnstileApiServiceConfig {
    siteverify_endpoint: Arc<Url>,
}

impl TurnstileApiServiceConfig {
    pub fn new(siteverify_endpoint_override: Option<Url>) -> anyhow::Result<Self> {
        let siteverify_endpoint = match siteverify_endpoint_override {
            Some(url) => url,
            None => SITEVERIFY_ENDPOINT
                .parse()
                .context("Failed to parse turnstile siteverify endpoint")?,
        };

        Ok(Self {
            siteverify_endpoint: siteverify_endpoint.into(),
        })
    }
}

impl TurnstileApiService for TurnstileApiServiceImpl {
    async fn siteverify(
        &self,
        response: &str,
        secret: &str,
        remote_ip: Option<IpAddr>,
    ) -> anyhow::Result<TurnstileSiteverifyResponse> {
        let remoteip = remote_ip.map(|ip| ip.to_string()).unwrap_or_default();

        self.http
            .post((*self.config.siteverify_endpoint).clone())
            .form(&SiteverifyRequest {
                secret,
                response,
                remoteip: &remoteip,
            })
            .send()
            .await
            .context("Failed to send turnstile siteverify request")?
            .error_for_status()
            .context("Turnstile siteverify request returned an error")?
            .json::<SiteverifyResponse>()
            .await
            .map(Into::into)
            .context("Failed to deserialize turnstile siteverify response")
    }
}

#[derive(Serialize)]
struct SiteverifyRequest<'a> {
    secret: &'a str,
    response: &'a str,
    remoteip: &'a str,
}

#[derive(Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

impl From<SiteverifyResponse> for TurnstileSiteverifyResponse {
    fn from(value: SiteverifyResponse) -> Self {
        Self {
            success: value.success,
            error_codes: value.error_codes,
        }
    }
}
