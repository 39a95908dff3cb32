//! CORS negotiation for browser callers
//!
//! The assistant widget calls the relay cross-origin, so every response —
//! streamed success, error payload, even router fallbacks — must carry the
//! CORS headers. A spec-compliant CORS layer only returns
//! `Access-Control-Allow-Headers` on preflight, so the headers are stamped
//! explicitly here instead.

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Request headers the browser is allowed to send.
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Handle preflight requests and stamp CORS headers on every response.
///
/// `OPTIONS` short-circuits before routing: empty body, 204, CORS headers,
/// no upstream call.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(&mut response);
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(&mut response);
    response
}

fn apply_cors_headers(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
}
