use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response, routing, Extension, Router};
use intake_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use intake_models::contact::ContactForm;

use crate::{
    errors::{error, internal_server_error, success},
    extractors::form::FormFields,
    middlewares::client_ip::ClientIp,
};

pub const PATH: &str = "/api/contact";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(PATH, routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Extension(ClientIp(client_ip)): Extension<ClientIp>,
    fields: FormFields,
) -> Response {
    let form = ContactForm {
        name: fields.get("name"),
        email: fields.get("email"),
        phone: fields.get("phone"),
        message: fields.get("message"),
        subscribe: fields.get("subscribe"),
        challenge_token: fields.get("cf-turnstile-response"),
    };

    match service.submit(form, client_ip).await {
        // the receipt is deliberately not reflected in the response
        Ok(_) => success("Message sent successfully!"),
        Err(ContactSubmitError::MissingFields) => error(
            StatusCode::BAD_REQUEST,
            "Please fill in all required fields.",
        ),
        Err(ContactSubmitError::InvalidEmail) => error(
            StatusCode::BAD_REQUEST,
            "Please enter a valid email address.",
        ),
        Err(ContactSubmitError::MissingChallenge) => error(
            StatusCode::BAD_REQUEST,
            "Please complete the security check.",
        ),
        Err(ContactSubmitError::VerificationFailed) => error(
            StatusCode::BAD_REQUEST,
            "Security verification failed. Please try again.",
        ),
        Err(ContactSubmitError::Send) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send message. Please try again later.",
        ),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
