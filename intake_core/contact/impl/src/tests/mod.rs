use std::net::IpAddr;

use intake_core_contact_contracts::notification::MockContactNotificationService;
use intake_models::contact::{ChallengeToken, ContactForm, Submission};
use intake_shared_contracts::{
    captcha::MockCaptchaService, language::MockLanguageService,
    subscription::MockSubscriptionService,
};

use crate::ContactFeatureServiceImpl;

mod submit;

type Sut = ContactFeatureServiceImpl<
    MockCaptchaService,
    MockLanguageService,
    MockContactNotificationService,
    MockSubscriptionService,
>;

const REMOTE_IP: IpAddr = IpAddr::V4(std::net::Ipv4Addr::new(203, 0, 113, 7));
const ENGLISH_MESSAGE: &str =
    "Hello! We would like to book a tasting for six people next Saturday afternoon.";
const FRENCH_MESSAGE: &str =
    "Bonjour, nous aimerions réserver une dégustation pour six personnes samedi prochain.";

fn make_form(message: &str) -> ContactForm {
    ContactForm {
        name: Some("Max Mustermann".into()),
        email: Some("max.mustermann@example.de".into()),
        phone: Some("+1 555 0100".into()),
        message: Some(message.into()),
        subscribe: None,
        challenge_token: Some("challenge response".into()),
    }
}

fn make_submission(message: &str) -> Submission {
    Submission {
        name: "Max Mustermann".to_owned().try_into().unwrap(),
        email: "max.mustermann@example.de".to_owned().try_into().unwrap(),
        phone: Some("+1 555 0100".to_owned().try_into().unwrap()),
        message: message.to_owned().try_into().unwrap(),
        subscribe_requested: false,
        challenge_token: make_token(),
    }
}

fn make_token() -> ChallengeToken {
    ChallengeToken::try_new("challenge response".to_owned()).unwrap()
}
