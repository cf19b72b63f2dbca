use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::Router;
use intake_core_contact_contracts::ContactFeatureService;
use intake_core_newsletter_contracts::NewsletterFeatureService;
use intake_di::Build;
use intake_utils::Apply;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod extractors;
mod middlewares;
mod models;
mod routes;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Contact, Newsletter> {
    contact: Contact,
    newsletter: Newsletter,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    pub real_ip: Option<Arc<RealIpConfig>>,
}

/// Where to find the visitor's address when running behind a proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealIpConfig {
    pub header: String,
    /// Only trust the header on connections from this address.
    pub set_from: Option<IpAddr>,
}

impl<Contact, Newsletter> RestServer<Contact, Newsletter>
where
    Contact: ContactFeatureService,
    Newsletter: NewsletterFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr;
        let router = self.router();

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {addr}"))?;
        info!("Listening on {addr}");

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::newsletter::router(self.newsletter.into()))
            .apply(middlewares::panic_handler::add)
            .apply(middlewares::cors::add)
            .apply(middlewares::trace::add)
            .apply(middlewares::client_ip::add(self.config.real_ip))
            .apply(middlewares::request_id::add)
    }
}
