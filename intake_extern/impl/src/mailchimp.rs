use std::sync::Arc;

use anyhow::Context;
use intake_di::Build;
use intake_extern_contracts::mailchimp::{MailchimpAddMemberResult, MailchimpApiService};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const MEMBER_EXISTS: &str = "Member Exists";
const INVALID_RESOURCE: &str = "Invalid Resource";

#[derive(Debug, Clone, Build)]
pub struct MailchimpApiServiceImpl {
    config: MailchimpApiServiceConfig,
    http: HttpClient,
}

#[derive(Clone)]
pub struct MailchimpApiServiceConfig {
    members_endpoint: Arc<Url>,
    api_key: Arc<str>,
}

impl MailchimpApiServiceConfig {
    /// The API lives on a per account data center subdomain, unless
    /// `endpoint_override` replaces the whole base URL.
    pub fn new(
        api_key: &str,
        list_id: &str,
        data_center: &str,
        endpoint_override: Option<Url>,
    ) -> anyhow::Result<Self> {
        let base = match endpoint_override {
            Some(url) => url,
            None => format!("https://{data_center}.api.mailchimp.com/")
                .parse()
                .context("Failed to build mailchimp api URL")?,
        };

        Ok(Self {
            members_endpoint: base
                .join(&format!("3.0/lists/{list_id}/members"))
                .context("Failed to build mailchimp members URL")?
                .into(),
            api_key: api_key.into(),
        })
    }
}

impl std::fmt::Debug for MailchimpApiServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailchimpApiServiceConfig")
            .field("members_endpoint", &self.members_endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl MailchimpApiService for MailchimpApiServiceImpl {
    async fn add_member(&self, email: &str) -> anyhow::Result<MailchimpAddMemberResult> {
        let response = self
            .http
            .post((*self.config.members_endpoint).clone())
            .basic_auth("anystring", Some(&*self.config.api_key))
            .json(&AddMemberRequest {
                email_address: email,
                status: "subscribed",
            })
            .send()
            .await
            .context("Failed to send mailchimp add member request")?;

        let status = response.status();
        if status.is_success() {
            return Ok(MailchimpAddMemberResult::Added);
        }

        let error = response
            .json::<ErrorResponse>()
            .await
            .unwrap_or_default();

        Ok(match error.title.as_deref() {
            Some(MEMBER_EXISTS) => MailchimpAddMemberResult::MemberExists,
            Some(INVALID_RESOURCE) => MailchimpAddMemberResult::InvalidResource {
                detail: error.detail.unwrap_or_default(),
            },
            _ => MailchimpAddMemberResult::Failed {
                status: status.as_u16(),
                title: error.title,
                detail: error.detail,
            },
        })
    }
}

#[derive(Serialize)]
struct AddMemberRequest<'a> {
    email_address: &'a str,
    status: &'a str,
}

#[derive(Default, Deserialize)]
struct ErrorResponse {
    title: Option<String>,
    detail: Option<String>,
}
