use intake_core_contact_impl::{
    notification::ContactNotificationServiceImpl, ContactFeatureServiceImpl,
};
use intake_core_newsletter_impl::NewsletterFeatureServiceImpl;
use intake_email_impl::EmailServiceImpl;
use intake_extern_impl::{
    language::LinguaLanguageDetectorServiceImpl, mailchimp::MailchimpApiServiceImpl,
    resend::ResendApiServiceImpl, turnstile::TurnstileApiServiceImpl,
};
use intake_shared_impl::{
    captcha::CaptchaServiceImpl, language::LanguageServiceImpl,
    subscription::SubscriptionServiceImpl,
};

// API
pub type RestServer = intake_api_rest::RestServer<ContactFeature, NewsletterFeature>;

// Core
pub type ContactFeature =
    ContactFeatureServiceImpl<Captcha, Language, ContactNotification, Subscription>;
pub type ContactNotification = ContactNotificationServiceImpl<Email>;
pub type NewsletterFeature = NewsletterFeatureServiceImpl<Subscription>;

// Shared
pub type Captcha = CaptchaServiceImpl<TurnstileApi>;
pub type Language = LanguageServiceImpl<LanguageDetector>;
pub type Subscription = SubscriptionServiceImpl<MailchimpApi>;

// Email
pub type Email = EmailServiceImpl<ResendApi>;

// Extern
pub type TurnstileApi = TurnstileApiServiceImpl;
pub type ResendApi = ResendApiServiceImpl;
pub type MailchimpApi = MailchimpApiServiceImpl;
pub type LanguageDetector = LinguaLanguageDetectorServiceImpl;
