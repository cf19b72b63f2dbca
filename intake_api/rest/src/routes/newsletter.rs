use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response, routing, Router};
use intake_core_newsletter_contracts::{NewsletterFeatureService, NewsletterSubscribeError};

use crate::{
    errors::{error, internal_server_error, success},
    extractors::form::FormFields,
};

pub const PATH: &str = "/api/subscribe";

pub fn router(service: Arc<impl NewsletterFeatureService>) -> Router<()> {
    Router::new()
        .route(PATH, routing::post(subscribe))
        .with_state(service)
}

async fn subscribe(
    service: State<Arc<impl NewsletterFeatureService>>,
    fields: FormFields,
) -> Response {
    match service.subscribe(fields.get("email")).await {
        Ok(()) => success("Thanks for subscribing!"),
        Err(NewsletterSubscribeError::MissingEmail) => error(
            StatusCode::BAD_REQUEST,
            "Please enter your email address.",
        ),
        Err(NewsletterSubscribeError::InvalidEmail) => error(
            StatusCode::BAD_REQUEST,
            "Please enter a valid email address.",
        ),
        Err(NewsletterSubscribeError::Failed) => error(
            StatusCode::BAD_REQUEST,
            "Unable to subscribe. Please try again later.",
        ),
        Err(NewsletterSubscribeError::Other(err)) => internal_server_error(err),
    }
}
