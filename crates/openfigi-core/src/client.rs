//! OpenFIGI API client.
//!
//! A [`FigiClient`] holds only immutable configuration: base URL, default
//! headers, transport and diagnostic sink. Each call validates its batch,
//! performs a single POST and decodes the batch envelope. Nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use tracing::Level;

use crate::config::{self, endpoints, env_vars, headers, paths, DEFAULT_TIMEOUT};
use crate::context::CallContext;
use crate::diagnostics::{Diagnostic, DiscardSink, DynDiagnosticSink};
use crate::error::{FigiError, Result};
use crate::request::{validate_batch, MappingRequest};
use crate::response::{flatten_batch, parse_batch, MappingResponse};
use crate::transport::{DynHttpTransport, HttpRequest, ReqwestTransport};

/// Client for the OpenFIGI REST API.
#[derive(Clone)]
pub struct FigiClient {
    transport: DynHttpTransport,
    sink: DynDiagnosticSink,
    base_url: String,
    headers: Vec<(String, String)>,
}

impl std::fmt::Debug for FigiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("FigiClient")
            .field("base_url", &self.base_url)
            .field("headers", &names)
            .finish_non_exhaustive()
    }
}

impl FigiClient {
    /// Client with the production origin, no API key and a discarding sink.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Client configured from `OPENFIGI_API_KEY` and `OPENFIGI_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(key) = env_vars::api_key() {
            builder = builder.with_api_key(key);
        }
        if let Some(url) = env_vars::base_url() {
            builder = builder.with_base_url(url);
        }
        builder.build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers attached to every request, defaults first.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Map a batch of identifiers to FIGI records.
    ///
    /// An empty batch returns immediately. Otherwise every request is
    /// validated before anything is sent, and the first failure aborts the
    /// call. Results from all slots are concatenated in request order; an
    /// `error` or `warning` in any slot fails the whole call.
    pub async fn mapping(
        &self,
        ctx: &CallContext,
        requests: &[MappingRequest],
    ) -> Result<Vec<MappingResponse>> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }

        let mut diagnostic = Diagnostic {
            path: self.url(paths::MAPPING),
            method: "POST".to_string(),
            ..Default::default()
        };

        let result = self.exchange(ctx, requests, &mut diagnostic).await;
        match &result {
            Ok(_) => {
                diagnostic.message = "request made";
                self.sink.record(Level::DEBUG, &diagnostic);
            }
            Err(e) => {
                diagnostic.error = Some(e.to_string());
                self.sink.record(Level::ERROR, &diagnostic);
            }
        }
        result
    }

    /// Map a single identifier.
    pub async fn map_one(
        &self,
        ctx: &CallContext,
        request: &MappingRequest,
    ) -> Result<Vec<MappingResponse>> {
        self.mapping(ctx, std::slice::from_ref(request)).await
    }

    async fn exchange(
        &self,
        ctx: &CallContext,
        requests: &[MappingRequest],
        diagnostic: &mut Diagnostic,
    ) -> Result<Vec<MappingResponse>> {
        diagnostic.message = "failed validating request";
        validate_batch(requests)?;

        diagnostic.message = "failed marshaling request";
        let body = serde_json::to_vec(requests)?;
        diagnostic.body = String::from_utf8_lossy(&body).into_owned();

        let request = HttpRequest {
            method: diagnostic.method.clone(),
            url: diagnostic.path.clone(),
            headers: self.headers.clone(),
            body,
        };

        diagnostic.message = "failed making request";
        ctx.check()?;
        let response = ctx.run(self.transport.send(request)).await?;
        diagnostic.status = Some(response.status);

        let text = String::from_utf8_lossy(&response.body).into_owned();
        diagnostic.response = Some(text.clone());

        if !response.is_success() {
            diagnostic.message = "bad status code received";
            return Err(FigiError::Status {
                status: response.status,
                body: text,
            });
        }

        diagnostic.message = "failed response unmarshal";
        let results = parse_batch(&response.body)?;

        diagnostic.message = "mapping returned an error";
        flatten_batch(results)
    }
}

/// Construction-time options for [`FigiClient`].
pub struct ClientBuilder {
    transport: Option<DynHttpTransport>,
    sink: DynDiagnosticSink,
    base_url: String,
    headers: Vec<(String, String)>,
    timeout: Duration,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            transport: None,
            sink: Arc::new(DiscardSink),
            base_url: endpoints::PRODUCTION.to_string(),
            headers: vec![
                (
                    headers::CONTENT_TYPE.to_string(),
                    headers::APPLICATION_JSON.to_string(),
                ),
                (
                    headers::ACCEPT.to_string(),
                    headers::APPLICATION_JSON.to_string(),
                ),
            ],
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientBuilder {
    /// Replace the HTTP transport.
    pub fn with_transport(mut self, transport: DynHttpTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Send diagnostic records to `sink`.
    pub fn with_sink(mut self, sink: DynDiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    /// Override the API origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = config::normalize_base_url(base_url);
        self
    }

    /// Append a header to every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Authenticate with an OpenFIGI API key.
    pub fn with_api_key(self, key: impl Into<String>) -> Self {
        self.with_header(headers::API_KEY, key)
    }

    /// Request timeout for the default transport. Ignored when a transport
    /// is supplied.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<FigiClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_timeout(self.timeout)?),
        };

        Ok(FigiClient {
            transport,
            sink: self.sink,
            base_url: self.base_url,
            headers: self.headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let client = FigiClient::new().unwrap();
        assert_eq!(client.base_url(), "https://api.openfigi.com");
        assert_eq!(
            client.headers(),
            &[
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ]
        );
        assert_eq!(client.url(paths::MAPPING), "https://api.openfigi.com/v3/mapping");
    }

    #[test]
    fn test_builder_options() {
        let client = FigiClient::builder()
            .with_base_url("http://localhost:8080/")
            .with_api_key("secret")
            .with_header("X-Trace", "abc")
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.url(paths::MAPPING), "http://localhost:8080/v3/mapping");
        assert_eq!(client.headers().len(), 4);
        assert_eq!(
            client.headers()[2],
            ("X-OPENFIGI-APIKEY".to_string(), "secret".to_string())
        );
        assert_eq!(
            client.headers()[3],
            ("X-Trace".to_string(), "abc".to_string())
        );
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(env_vars::API_KEY, "env-key");
        std::env::set_var(env_vars::BASE_URL, "http://figi.local/");
        let client = FigiClient::from_env();
        std::env::remove_var(env_vars::API_KEY);
        std::env::remove_var(env_vars::BASE_URL);

        let client = client.unwrap();
        assert_eq!(client.base_url(), "http://figi.local");
        assert_eq!(
            client.headers().last(),
            Some(&("X-OPENFIGI-APIKEY".to_string(), "env-key".to_string()))
        );
    }

    #[test]
    fn test_debug_hides_header_values() {
        let client = FigiClient::builder().with_api_key("secret").build().unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("X-OPENFIGI-APIKEY"));
        assert!(!debug.contains("secret"));
    }
}
