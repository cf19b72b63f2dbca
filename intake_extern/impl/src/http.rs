use std::{ops::Deref, time::Duration};

use anyhow::Context;

pub const USER_AGENT: &str = concat!("intake/", env!("CARGO_PKG_VERSION"));

/// Shared client for all outbound provider calls. Every request is bounded by
/// the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map(Self)
            .context("Failed to build http client")
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
