use std::{collections::BTreeMap, sync::Arc};

use anyhow::Context;
use intake_di::Build;
use intake_extern_contracts::resend::{
    ResendApiService, ResendContent, ResendEmail, ResendSendResult,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

/// https://resend.com/docs/api-reference/emails/send-email
const API_ENDPOINT: &str = "https://api.resend.com/";

#[derive(Debug, Clone, Build)]
pub struct ResendApiServiceImpl {
    config: ResendApiServiceConfig,
    http: HttpClient,
}

#[derive(Clone)]
pub struct ResendApiServiceConfig {
    emails_endpoint: Arc<Url>,
    api_key: Arc<str>,
}

impl ResendApiServiceConfig {
    pub fn new(api_key: &str, endpoint_override: Option<Url>) -> anyhow::Result<Self> {
        let base = match endpoint_override {
            Some(url) => url,
            None => API_ENDPOINT
                .parse()
                .context("Failed to parse resend api endpoint")?,
        };

        Ok(Self {
            emails_endpoint: base
                .join("emails")
                .context("Failed to build resend emails URL")?
                .into(),
            api_key: api_key.into(),
        })
    }
}

impl std::fmt::Debug for ResendApiServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendApiServiceConfig")
            .field("emails_endpoint", &self.emails_endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl ResendApiService for ResendApiServiceImpl {
    async fn send_email(&self, email: ResendEmail) -> anyhow::Result<ResendSendResult> {
        let response = self
            .http
            .post((*self.config.emails_endpoint).clone())
            .bearer_auth(&*self.config.api_key)
            .json(&SendEmailRequest::from(&email))
            .send()
            .await
            .context("Failed to send resend email request")?;

        if !response.status().is_success() {
            let error = response
                .json::<ErrorResponse>()
                .await
                .unwrap_or_default();
            return Ok(ResendSendResult::Rejected {
                message: error
                    .message
                    .unwrap_or_else(|| "Failed to send email".into()),
            });
        }

        // The email is accepted once Resend answers with a success status.
        let id = response
            .json::<SendEmailResponse>()
            .await
            .ok()
            .and_then(|response| response.id);

        Ok(ResendSendResult::Sent { id })
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    cc: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<Template<'a>>,
}

#[derive(Serialize)]
struct Template<'a> {
    id: &'a str,
    variables: &'a BTreeMap<String, String>,
}

impl<'a> From<&'a ResendEmail> for SendEmailRequest<'a> {
    fn from(email: &'a ResendEmail) -> Self {
        let (text, template) = match &email.content {
            ResendContent::Text(text) => (Some(text.as_str()), None),
            ResendContent::Template { id, variables } => (None, Some(Template { id, variables })),
        };

        Self {
            from: &email.from,
            to: &email.to,
            cc: (!email.cc.is_empty()).then_some(email.cc.as_slice()),
            reply_to: email.reply_to.as_deref(),
            subject: &email.subject,
            text,
            template,
        }
    }
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

#[derive(Default, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}
