/*
[INPUT]:  Client configuration (base URLs, credentials, compression, span)
[OUTPUT]: Configured reqwest client plus the JSON dispatch primitives
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{Instrument, Span, debug, warn};
use url::form_urlencoded;

use crate::config::ClientConfig;
use crate::http::error::{TransportError, normalize};
use crate::http::signature::{Clock, RequestSigner, SystemClock};
use crate::http::{ComlinkError, Result};

/// Main HTTP client for the comlink API
#[derive(Debug, Clone)]
pub struct ComlinkClient {
    http_client: Client,
    base_url: String,
    stats_base_url: String,
    signer: RequestSigner,
    clock: Arc<dyn Clock>,
    span: Span,
}

impl ComlinkClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_clock(config, Arc::new(SystemClock))
    }

    /// Create a new client with custom configuration and signing clock
    pub fn with_config_and_clock(config: ClientConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        Url::parse(&config.base_url)?;
        Url::parse(&config.stats_base_url)?;

        if config.has_partial_credentials() {
            warn!(
                base_url = %config.base_url,
                "only one of access key / secret key is set; requests will not be signed"
            );
        }

        let mut builder = Client::builder()
            .gzip(config.compression_enabled)
            .brotli(config.compression_enabled)
            .deflate(config.compression_enabled);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ComlinkError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            stats_base_url: config.stats_base_url.trim_end_matches('/').to_string(),
            signer: RequestSigner::new(config.access_key, config.secret_key),
            clock,
            span: config.span,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stats_base_url(&self) -> &str {
        &self.stats_base_url
    }

    /// Whether POST requests carry signing headers
    pub fn is_signing_enabled(&self) -> bool {
        self.signer.is_enabled()
    }

    /// POST `payload` as JSON to `base_url + uri`, signing it when keys are set.
    ///
    /// Failures are normalized before they are returned.
    pub async fn post_json<P, T>(&self, uri: &str, payload: Option<&P>) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = payload.map(|p| serde_json::to_string(p)).transpose()?;

        let mut headers = HeaderMap::new();
        self.signer.sign(
            self.clock.now_millis(),
            &Method::POST,
            uri,
            &mut headers,
            body.as_deref(),
        )?;
        let signed = !headers.is_empty();

        let url = join_url(&self.base_url, uri)?;
        let builder = with_json_body(self.http_client.post(url).headers(headers), body);

        self.dispatch(&Method::POST, uri, signed, builder)
            .await
            .map_err(normalize)
    }

    /// GET `base_url + uri`. Never signed.
    pub async fn get_json<T>(&self, uri: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = join_url(&self.base_url, uri)?;
        let builder = self.http_client.get(url);

        self.dispatch(&Method::GET, uri, false, builder)
            .await
            .map_err(normalize)
    }

    /// POST `payload` to the stats host. Never signed, never normalized.
    pub async fn post_stats<P, T>(
        &self,
        path: &str,
        payload: &P,
        flags: &[&str],
        lang: Option<&str>,
    ) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(payload)?;
        let uri = format!("{path}{}", stats_query(flags, lang));

        let url = join_url(&self.stats_base_url, &uri)?;
        let builder = with_json_body(self.http_client.post(url), Some(body));

        self.dispatch(&Method::POST, &uri, false, builder)
            .await
            .map_err(ComlinkError::Stats)
    }

    async fn dispatch<T>(
        &self,
        method: &Method,
        uri: &str,
        signed: bool,
        builder: RequestBuilder,
    ) -> std::result::Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        async move {
            debug!(method = %method, uri, signed, "sending request");
            let result = send_json(builder).await;
            match &result {
                Ok(_) => debug!(method = %method, uri, "request succeeded"),
                Err(err) => warn!(
                    method = %method,
                    uri,
                    status = err.status.map(|s| s.as_u16()),
                    code = err.code.as_deref(),
                    error = %err.message,
                    "request failed"
                ),
            }
            result
        }
        .instrument(self.span.clone())
        .await
    }
}

/// Send the request and parse a JSON response.
///
/// Non-2xx responses keep their body when it is valid JSON so the
/// normalizer can look at it.
async fn send_json<T>(builder: RequestBuilder) -> std::result::Result<T, TransportError>
where
    T: DeserializeOwned,
{
    let response = builder.send().await.map_err(TransportError::from_reqwest)?;
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(TransportError::from_reqwest)?;

    if !status.is_success() {
        let body = serde_json::from_slice::<Value>(&bytes).ok();
        return Err(TransportError::from_status(status, body));
    }

    serde_json::from_slice(&bytes).map_err(|e| TransportError::malformed(status, &e))
}

fn with_json_body(builder: RequestBuilder, body: Option<String>) -> RequestBuilder {
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body),
        None => builder,
    }
}

/// Concatenate base and path; unlike `Url::join` this keeps any base path prefix
fn join_url(base: &str, uri: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{base}{uri}"))?)
}

/// `?flags=a,b&language=xx`, or "" when there is nothing to send.
///
/// Each value is query-encoded; the commas between flags stay literal.
pub fn stats_query(flags: &[&str], lang: Option<&str>) -> String {
    let mut params = Vec::new();
    if !flags.is_empty() {
        let flags: Vec<String> = flags.iter().map(|flag| encode_query_value(flag)).collect();
        params.push(format!("flags={}", flags.join(",")));
    }
    if let Some(lang) = lang.filter(|l| !l.is_empty()) {
        params.push(format!("language={}", encode_query_value(lang)));
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
