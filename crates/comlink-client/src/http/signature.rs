/*
[INPUT]:  Access/secret key pair, clock, request method, URI and body
[OUTPUT]: Signed request headers (X-Date, Authorization)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::fmt;

use hmac::{Hmac, Mac};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use sha2::Sha256;

use crate::http::{ComlinkError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the signing timestamp
pub const X_DATE: HeaderName = HeaderName::from_static("x-date");

/// Source of the signing timestamp
pub trait Clock: fmt::Debug + Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Signs outbound requests with HMAC-SHA256
#[derive(Clone)]
pub struct RequestSigner {
    access_key: String,
    secret_key: String,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl RequestSigner {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Signing needs both halves of the key pair
    pub fn is_enabled(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }

    /// Add `X-Date` and `Authorization` to `headers`.
    ///
    /// `body` is the exact JSON text sent on the wire, if any. Does nothing
    /// when either key is empty.
    pub fn sign(
        &self,
        timestamp_ms: i64,
        method: &Method,
        uri: &str,
        headers: &mut HeaderMap,
        body: Option<&str>,
    ) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let timestamp = timestamp_ms.to_string();
        let signature = self.signature(&timestamp, method, uri, body)?;
        let authorization = format!(
            "HMAC-SHA256 Credential={},Signature={signature}",
            self.access_key
        );
        let authorization = HeaderValue::from_str(&authorization).map_err(|e| {
            ComlinkError::Config(format!("access key is not a valid header value: {e}"))
        })?;

        headers.insert(X_DATE, HeaderValue::from(timestamp_ms));
        headers.insert(AUTHORIZATION, authorization);
        Ok(())
    }

    /// Hex HMAC over timestamp, method, URI and the body digest, in that order
    pub fn signature(
        &self,
        timestamp: &str,
        method: &Method,
        uri: &str,
        body: Option<&str>,
    ) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| ComlinkError::Config(format!("invalid secret key: {e}")))?;
        mac.update(timestamp.as_bytes());
        mac.update(method.as_str().as_bytes());
        mac.update(uri.as_bytes());
        mac.update(body_digest(body).as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// MD5 hex digest of the serialized body; absent, `null` and `{}` hash as ""
pub fn body_digest(body: Option<&str>) -> String {
    let input = match body {
        Some(text) if !is_empty_body(text) => text,
        _ => "",
    };
    format!("{:x}", md5::compute(input.as_bytes()))
}

fn is_empty_body(text: &str) -> bool {
    matches!(text.trim(), "" | "null" | "{}")
}
