//! Response helpers shared by the HTML handlers

pub mod flash;

pub use flash::{Flash, FlashMessage, Level};

use axum::http::header::{CACHE_CONTROL, LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

/// 302 to `location`, carrying one flash message
pub fn redirect_with(location: &str, message: FlashMessage) -> Response {
    let mut response = found(location);
    response
        .headers_mut()
        .insert(SET_COOKIE, flash::set_cookie(&[message]));
    response
}

/// Plain 302 to `location`
pub fn found(location: &str) -> Response {
    let mut response = StatusCode::FOUND.into_response();
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(LOCATION, value);
    }
    response
}

/// 200 HTML page; clears the flash cookie once its messages were rendered
pub fn page(html: String, flash: &Flash) -> Response {
    let mut response = Html(html).into_response();
    let headers = response.headers_mut();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    if !flash.is_empty() {
        headers.insert(SET_COOKIE, flash::clear_cookie());
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_with_sets_cookie() {
        let response = redirect_with("/productos/", FlashMessage::success("ok"));
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/productos/");
        assert!(response.headers().contains_key(SET_COOKIE));
    }

    #[test]
    fn test_page_clears_shown_messages() {
        let response = page("<p>hola</p>".into(), &Flash::default());
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!response.headers().contains_key(SET_COOKIE));

        let flash = Flash(vec![FlashMessage::success("ok")]);
        let response = page("<p>hola</p>".into(), &flash);
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.contains("Max-Age=0"));
    }
}
