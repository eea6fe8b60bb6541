//! HTTP gateway to the NSX manager's services API.
//!
//! Every call is a plain GET against
//! `https://{host}/api/2.0/services/{path}` with basic auth and an XML
//! content type. Higher-level modules depend on the [`Transport`] trait
//! rather than on the concrete gateway, which keeps the resolver and the
//! report builder testable without a manager on the network.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use sgquery_common::config::Config;
use sgquery_common::error::QueryError;

const API_BASE: &str = "api/2.0/services";

/// Relative path of the security group catalog for a scope.
pub fn catalog_path(scope: &str) -> String {
    format!("securitygroup/scope/{scope}")
}

/// Relative path of a group's definition, carrying its static includes.
pub fn group_path(id: &str) -> String {
    format!("securitygroup/{id}")
}

/// Relative path of a group's translated IP address members.
pub fn ip_translation_path(id: &str) -> String {
    format!("securitygroup/{id}/translation/ipaddresses")
}

/// Relative path of a group's translated virtual machine members.
pub fn vm_translation_path(id: &str) -> String {
    format!("securitygroup/{id}/translation/virtualmachines")
}

/// One sequential, blocking-until-answered fetch of a raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String, QueryError>;
}

pub struct ApiGateway {
    http: Client,
    host: String,
    username: String,
    password: String,
}

impl ApiGateway {
    pub fn new(cfg: &Config) -> Result<Self, QueryError> {
        // Managers almost always present a self-signed certificate, so
        // verification is off. Surfaced once here instead of as a warning
        // on every request.
        debug!("TLS certificate verification is disabled for {}", cfg.host);

        let http: Client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|err| QueryError::transport(&cfg.host, "", None, err.to_string()))?;

        Ok(Self {
            http,
            host: cfg.host.clone(),
            username: cfg.username.clone(),
            password: cfg.password.clone(),
        })
    }
}

#[async_trait]
impl Transport for ApiGateway {
    async fn fetch(&self, path: &str) -> Result<String, QueryError> {
        let url: String = format!("https://{}/{}/{}", self.host, API_BASE, path);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/xml")
            .send()
            .await
            .map_err(|err| QueryError::transport(&self.host, path, None, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::transport(
                &self.host,
                path,
                Some(status.as_u16()),
                format!("HTTP {status}"),
            ));
        }

        response
            .text()
            .await
            .map_err(|err| QueryError::transport(&self.host, path, None, err.to_string()))
    }
}
