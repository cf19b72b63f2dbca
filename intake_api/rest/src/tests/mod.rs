use std::{net::IpAddr, sync::Arc};

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
};
use intake_core_contact_contracts::MockContactFeatureService;
use intake_core_newsletter_contracts::MockNewsletterFeatureService;
use serde_json::Value;
use tower::ServiceExt;

use crate::{RealIpConfig, RestServer, RestServerConfig};


const BOUNDARY: &str = "X-INTAKE-BOUNDARY";

struct TestServer {
    contact: MockContactFeatureService,
    newsletter: MockNewsletterFeatureService,
    real_ip: Option<Arc<RealIpConfig>>,
}

impl Default for TestServer {
    fn default() -> Self {
        Self {
            contact: MockContactFeatureService::new(),
            newsletter: MockNewsletterFeatureService::new(),
            real_ip: None,
        }
    }
}

impl TestServer {
    async fn send(self, request: Request<Body>) -> Response<Body> {
        let router = RestServer {
            contact: self.contact,
            newsletter: self.newsletter,
            config: RestServerConfig {
                addr: ([127, 0, 0, 1], 0).into(),
                real_ip: self.real_ip,
            },
        }
        .router();

        router.oneshot(request).await.unwrap()
    }
}

fn urlencoded(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn multipart(path: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn assert_cors_headers(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

async fn assert_response(response: Response<Body>, status: StatusCode, expected: Value) {
    assert_eq!(response.status(), status);
    assert_cors_headers(&response);
    pretty_assertions::assert_eq!(json_body(response).await, expected);
}

const REMOTE_IP: IpAddr = IpAddr::V4(std::net::Ipv4Addr::new(203, 0, 113, 7));
