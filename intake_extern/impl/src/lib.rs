pub mod http;
pub mod language;
pub mod mailchimp;
pub mod resend;
pub mod turnstile;
