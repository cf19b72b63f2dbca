use std::sync::Arc;

use intake_api_rest::{RealIpConfig, RestServerConfig};
use intake_config::Config;
use intake_core_contact_impl::notification::ContactNotificationConfig;
use intake_di::provider;
use intake_email_impl::EmailServiceConfig;
use intake_extern_impl::{
    http::HttpClient, mailchimp::MailchimpApiServiceConfig, resend::ResendApiServiceConfig,
    turnstile::TurnstileApiServiceConfig,
};
use intake_shared_impl::{captcha::CaptchaServiceConfig, language::LanguageServiceConfig};

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        http_client: HttpClient,

        // API
        rest_server_config: RestServerConfig,

        // Extern
        turnstile_api_service_config: TurnstileApiServiceConfig,
        resend_api_service_config: ResendApiServiceConfig,
        mailchimp_api_service_config: MailchimpApiServiceConfig,

        // Email
        email_service_config: EmailServiceConfig,

        // Shared
        captcha_service_config: CaptchaServiceConfig,
        language_service_config: LanguageServiceConfig,

        // Core
        contact_notification_config: ContactNotificationConfig,
    }
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client = HttpClient::new(config.http_client.timeout.into())?;

        // API
        let rest_server_config = RestServerConfig {
            addr: config.http.address,
            real_ip: config.http.real_ip.as_ref().map(|real_ip| {
                Arc::new(RealIpConfig {
                    header: real_ip.header.clone(),
                    set_from: real_ip.set_from,
                })
            }),
        };

        // Extern
        let turnstile_api_service_config =
            TurnstileApiServiceConfig::new(config.turnstile.siteverify_endpoint_override.clone())?;

        let resend_api_service_config = ResendApiServiceConfig::new(
            config.resend.api_key.expose(),
            config.resend.endpoint_override.clone(),
        )?;

        let mailchimp_api_service_config = MailchimpApiServiceConfig::new(
            config.mailchimp.api_key.expose(),
            &config.mailchimp.list_id,
            &config.mailchimp.data_center,
            config.mailchimp.endpoint_override.clone(),
        )?;

        // Email
        let email_service_config = EmailServiceConfig {
            from: config.contact.from.clone().into(),
        };

        // Shared
        let captcha_service_config = CaptchaServiceConfig {
            secret: config.turnstile.secret.expose().into(),
        };

        let language_service_config = LanguageServiceConfig {
            min_text_length: config.language.min_text_length,
            min_segment_length: config.language.min_segment_length,
            english_threshold: config.language.english_threshold,
            top_candidates: config.language.top_candidates,
        };

        // Core
        let contact_notification_config = ContactNotificationConfig {
            to: config.contact.to.as_slice().into(),
            cc: config.contact.cc.as_slice().into(),
            oversight: config.contact.oversight.clone().into(),
            subject: config.contact.subject.as_str().into(),
            template_id: config.contact.template_id.as_str().into(),
        };

        Ok(Self {
            _cache: Default::default(),
            http_client,
            rest_server_config,
            turnstile_api_service_config,
            resend_api_service_config,
            mailchimp_api_service_config,
            email_service_config,
            captcha_service_config,
            language_service_config,
            contact_notification_config,
        })
    }
}
