use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::Response,
};

/// Form field naming the intended method of an HTML form `POST`.
pub const METHOD_FIELD: &str = "_method";

const MAX_FORM_BYTES: usize = 64 * 1024;

/// Rewrite `POST` form submissions carrying `_method=patch|put|delete`.
///
/// Must wrap the router from outside; routing has already happened for
/// layers added with `Router::layer`.
pub async fn method_override(req: Request, next: Next) -> Result<Response, StatusCode> {
    if req.method() != Method::POST || !is_form(req.headers()) {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    if let Some(method) = override_method(&bytes) {
        tracing::debug!(uri = %parts.uri, %method, "method override");
        parts.method = method;
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

fn override_method(body: &[u8]) -> Option<Method> {
    let body = std::str::from_utf8(body).ok()?;
    let (_, value) = body
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == METHOD_FIELD)?;

    match value.to_ascii_lowercase().as_str() {
        "patch" => Some(Method::PATCH),
        "put" => Some(Method::PUT),
        "delete" => Some(Method::DELETE),
        _ => None,
    }
}
