use intake_core_contact_contracts::{
    notification::MockContactNotificationService, ContactFeatureService, ContactReceipt,
    ContactRoute, ContactSubmitError, SubscriptionStatus,
};
use intake_email_contracts::DispatchOutcome;
use intake_models::{
    contact::ContactForm,
    language::{LanguageClassification, LanguageCode},
};
use intake_shared_contracts::{
    captcha::{CaptchaCheckError, MockCaptchaService},
    language::MockLanguageService,
    subscription::{MockSubscriptionService, SubscriptionEnrollError},
};
use intake_utils::{assert_matches, Apply};
use pretty_assertions::assert_eq;

use super::{
    make_form, make_submission, make_token, Sut, ENGLISH_MESSAGE, FRENCH_MESSAGE, REMOTE_IP,
};
use crate::ContactFeatureServiceImpl;

#[tokio::test]
async fn ok_full() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new().with_classify(
        ENGLISH_MESSAGE.into(),
        LanguageClassification {
            is_english: true,
            top_language: LanguageCode::new("eng"),
        },
    );

    let contact_notification = MockContactNotificationService::new()
        .with_send_full(make_submission(ENGLISH_MESSAGE), DispatchOutcome::delivered());

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(make_form(ENGLISH_MESSAGE), Some(REMOTE_IP)).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactReceipt {
            route: ContactRoute::Full,
            subscription: SubscriptionStatus::NotRequested,
        }
    );
}

#[tokio::test]
async fn ok_full_short_message_without_remote_ip() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(make_token(), None, Ok(()));

    let language = MockLanguageService::new()
        .with_classify("Hi!".into(), LanguageClassification::undetermined());

    let contact_notification = MockContactNotificationService::new()
        .with_send_full(make_submission("Hi!"), DispatchOutcome::delivered());

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(make_form("Hi!"), None).await;

    // Assert
    assert_eq!(result.unwrap().route, ContactRoute::Full);
}

#[tokio::test]
async fn ok_full_with_subscription() {
    // Arrange
    let form = ContactForm {
        subscribe: Some("yes".into()),
        ..make_form(ENGLISH_MESSAGE)
    };
    let submission = make_submission(ENGLISH_MESSAGE).with(|s| s.subscribe_requested = true);

    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new()
        .with_classify(ENGLISH_MESSAGE.into(), english_classification());

    let contact_notification = MockContactNotificationService::new()
        .with_send_full(submission.clone(), DispatchOutcome::delivered());

    let subscription =
        MockSubscriptionService::new().with_enroll(submission.email.clone(), Ok(()));

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        subscription,
    };

    // Act
    let result = sut.submit(form, Some(REMOTE_IP)).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactReceipt {
            route: ContactRoute::Full,
            subscription: SubscriptionStatus::Enrolled,
        }
    );
}

#[tokio::test]
async fn ok_full_subscription_failure_is_ignored() {
    // Arrange
    let form = ContactForm {
        subscribe: Some("yes".into()),
        ..make_form(ENGLISH_MESSAGE)
    };
    let submission = make_submission(ENGLISH_MESSAGE).with(|s| s.subscribe_requested = true);

    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new()
        .with_classify(ENGLISH_MESSAGE.into(), english_classification());

    let contact_notification = MockContactNotificationService::new()
        .with_send_full(submission.clone(), DispatchOutcome::delivered());

    let subscription = MockSubscriptionService::new().with_enroll(
        submission.email.clone(),
        Err(SubscriptionEnrollError::Failed {
            detail: Some("500: Internal Server Error".into()),
        }),
    );

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        subscription,
    };

    // Act
    let result = sut.submit(form, Some(REMOTE_IP)).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactReceipt {
            route: ContactRoute::Full,
            subscription: SubscriptionStatus::Failed,
        }
    );
}

#[tokio::test]
async fn ok_subscribe_marker_must_be_yes() {
    // Arrange
    let form = ContactForm {
        subscribe: Some("on".into()),
        ..make_form(ENGLISH_MESSAGE)
    };

    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new()
        .with_classify(ENGLISH_MESSAGE.into(), english_classification());

    let contact_notification = MockContactNotificationService::new()
        .with_send_full(make_submission(ENGLISH_MESSAGE), DispatchOutcome::delivered());

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(form, Some(REMOTE_IP)).await;

    // Assert
    assert_eq!(result.unwrap().subscription, SubscriptionStatus::NotRequested);
}

#[tokio::test]
async fn ok_empty_phone_is_not_provided() {
    // Arrange
    let form = ContactForm {
        phone: Some(String::new()),
        ..make_form(ENGLISH_MESSAGE)
    };
    let submission = make_submission(ENGLISH_MESSAGE).with(|s| s.phone = None);

    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new()
        .with_classify(ENGLISH_MESSAGE.into(), english_classification());

    let contact_notification = MockContactNotificationService::new()
        .with_send_full(submission, DispatchOutcome::delivered());

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(form, Some(REMOTE_IP)).await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn ok_filtered() {
    // Arrange
    let form = ContactForm {
        subscribe: Some("yes".into()),
        ..make_form(FRENCH_MESSAGE)
    };
    let submission = make_submission(FRENCH_MESSAGE).with(|s| s.subscribe_requested = true);

    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new()
        .with_classify(FRENCH_MESSAGE.into(), french_classification());

    let contact_notification = MockContactNotificationService::new().with_send_filtered(
        submission,
        LanguageCode::new("fra"),
        DispatchOutcome::delivered(),
    );

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(form, Some(REMOTE_IP)).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactReceipt {
            route: ContactRoute::Filtered {
                language: LanguageCode::new("fra"),
                delivered: true,
            },
            subscription: SubscriptionStatus::Skipped,
        }
    );
}

#[tokio::test]
async fn ok_filtered_delivery_failure_is_hidden() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new()
        .with_classify(FRENCH_MESSAGE.into(), french_classification());

    let contact_notification = MockContactNotificationService::new().with_send_filtered(
        make_submission(FRENCH_MESSAGE),
        LanguageCode::new("fra"),
        DispatchOutcome::failed("The `to` field is invalid."),
    );

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(make_form(FRENCH_MESSAGE), Some(REMOTE_IP)).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactReceipt {
            route: ContactRoute::Filtered {
                language: LanguageCode::new("fra"),
                delivered: false,
            },
            subscription: SubscriptionStatus::NotRequested,
        }
    );
}

#[tokio::test]
async fn ok_filtered_transport_fault_is_hidden() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new()
        .with_classify(FRENCH_MESSAGE.into(), french_classification());

    let contact_notification = MockContactNotificationService::new()
        .with_send_filtered_error(make_submission(FRENCH_MESSAGE), LanguageCode::new("fra"));

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(make_form(FRENCH_MESSAGE), Some(REMOTE_IP)).await;

    // Assert
    assert_matches!(
        result,
        Ok(ContactReceipt {
            route: ContactRoute::Filtered { delivered: false, .. },
            ..
        })
    );
}

#[tokio::test]
async fn missing_fields() {
    for form in [
        ContactForm {
            name: None,
            ..make_form(ENGLISH_MESSAGE)
        },
        ContactForm {
            email: Some(String::new()),
            ..make_form(ENGLISH_MESSAGE)
        },
        ContactForm {
            message: None,
            ..make_form(ENGLISH_MESSAGE)
        },
        // reported before the malformed email address and the missing token
        ContactForm {
            name: Some(String::new()),
            email: Some("not an email".into()),
            challenge_token: None,
            ..make_form(ENGLISH_MESSAGE)
        },
    ] {
        // Arrange
        let sut = Sut::default();

        // Act
        let result = sut.submit(form, Some(REMOTE_IP)).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::MissingFields));
    }
}

#[tokio::test]
async fn invalid_email() {
    for email in ["plainaddress", "no-tld@example", "spa ce@example.com"] {
        // Arrange
        let form = ContactForm {
            email: Some(email.into()),
            challenge_token: None,
            ..make_form(ENGLISH_MESSAGE)
        };

        let sut = Sut::default();

        // Act
        let result = sut.submit(form, Some(REMOTE_IP)).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::InvalidEmail));
    }
}

#[tokio::test]
async fn missing_challenge() {
    for challenge_token in [None, Some(String::new())] {
        // Arrange
        let form = ContactForm {
            challenge_token,
            ..make_form(ENGLISH_MESSAGE)
        };

        let sut = Sut::default();

        // Act
        let result = sut.submit(form, Some(REMOTE_IP)).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::MissingChallenge));
    }
}

#[tokio::test]
async fn verification_failed() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(
        make_token(),
        Some(REMOTE_IP),
        Err(CaptchaCheckError::Failed),
    );

    let sut = ContactFeatureServiceImpl {
        captcha,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(make_form(ENGLISH_MESSAGE), Some(REMOTE_IP)).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::VerificationFailed));
}

#[tokio::test]
async fn send_failed() {
    // Arrange
    let form = ContactForm {
        subscribe: Some("yes".into()),
        ..make_form(ENGLISH_MESSAGE)
    };
    let submission = make_submission(ENGLISH_MESSAGE).with(|s| s.subscribe_requested = true);

    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new()
        .with_classify(ENGLISH_MESSAGE.into(), english_classification());

    let contact_notification = MockContactNotificationService::new()
        .with_send_full(submission, DispatchOutcome::failed("Invalid API key"));

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(form, Some(REMOTE_IP)).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Send));
}

#[tokio::test]
async fn send_transport_fault() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(make_token(), Some(REMOTE_IP), Ok(()));

    let language = MockLanguageService::new()
        .with_classify(ENGLISH_MESSAGE.into(), english_classification());

    let contact_notification = MockContactNotificationService::new()
        .with_send_full_error(make_submission(ENGLISH_MESSAGE));

    let sut = ContactFeatureServiceImpl {
        captcha,
        language,
        contact_notification,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(make_form(ENGLISH_MESSAGE), Some(REMOTE_IP)).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Other(_)));
}

fn english_classification() -> LanguageClassification {
    LanguageClassification {
        is_english: true,
        top_language: LanguageCode::new("eng"),
    }
}

fn french_classification() -> LanguageClassification {
    LanguageClassification {
        is_english: false,
        top_language: LanguageCode::new("fra"),
    }
}
