use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, Response},
    middleware::Next,
    Extension,
};
use chrono::Utc;
use serde_json::json;

use crate::{
    constants::REQUEST_ID_HEADER, responses::ResponseMeta, types::RequestID,
    utils::id::request_id as gen_request_id,
};

/// Tags the request with a fresh id and echoes it in the `x-request-id`
/// response header.
pub async fn request_id(mut req: Request, next: Next) -> Response<Body> {
    let id = gen_request_id();

    req.extensions_mut().insert(RequestID(id.clone()));

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

// Keep below request_id() in the layer stack.
pub async fn response_meta(
    Extension(RequestID(request_id)): Extension<RequestID>,
    mut req: Request,
    next: Next,
) -> Response<Body> {
    let meta: ResponseMeta = ResponseMeta::from([
        ("request_id", json!(request_id)),
        ("timestamp", json!(Utc::now().timestamp_millis())),
    ]);

    req.extensions_mut().insert(meta);

    next.run(req).await
}
