//! Flash messages
//!
//! Messages queued by a write survive the redirect in the `carri_flash`
//! cookie (base64url JSON) and are cleared by the next rendered page.

use axum::extract::FromRequestParts;
use axum::http::HeaderValue;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "carri_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    /// Alert style used by the page layout
    pub fn css_class(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: Level,
    pub text: String,
}

impl FlashMessage {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Level::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Level::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Level::Error, text)
    }
}

pub fn encode(messages: &[FlashMessage]) -> String {
    // Serializing plain structs cannot fail
    let json = serde_json::to_vec(messages).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Tampered or stale cookies decode to no messages
pub fn decode(value: &str) -> Vec<FlashMessage> {
    URL_SAFE_NO_PAD
        .decode(value.trim())
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn header_value(cookie: &Cookie<'_>) -> Option<HeaderValue> {
    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// `Set-Cookie` value carrying `messages` to the next request
pub fn set_cookie(messages: &[FlashMessage]) -> HeaderValue {
    // base64url output is always a valid header value
    header_value(&flash_cookie(encode(messages))).unwrap_or_else(clear_cookie)
}

/// `Set-Cookie` value expiring the flash cookie
pub fn clear_cookie() -> HeaderValue {
    let mut cookie = flash_cookie(String::new());
    cookie.make_removal();
    header_value(&cookie)
        .unwrap_or_else(|| HeaderValue::from_static("carri_flash=; Path=/; Max-Age=0"))
}

/// Messages delivered with the current request
#[derive(Debug, Clone, Default)]
pub struct Flash(pub Vec<FlashMessage>);

impl Flash {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, message: FlashMessage) {
        self.0.push(message);
    }

    pub fn messages(&self) -> &[FlashMessage] {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let messages = CookieJar::from_headers(&parts.headers)
            .get(FLASH_COOKIE)
            .map(|cookie| decode(cookie.value()))
            .unwrap_or_default();
        Ok(Flash(messages))
    }
}
