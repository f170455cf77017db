use std::collections::HashMap;

use axum::{
    extract,
    http::StatusCode,
    response::{self, IntoResponse},
    Extension,
};
use serde_json::{json, Value};

use crate::responses::{Error, Response, ResponseMeta};

/// Envelope with a single error and no data.
pub fn error_response(
    status: StatusCode,
    message: &str,
    detail: &str,
    location: Option<&str>,
    error_meta: HashMap<&str, Value>,
    response_meta: ResponseMeta,
) -> response::Response {
    (
        status,
        Response::<Value>::new(
            None,
            Some(vec![Error::new(
                status.as_u16(),
                message,
                detail,
                location,
                error_meta,
            )]),
            Some(response_meta),
            None,
        ),
    )
        .into_response()
}

pub async fn handler_404(
    Extension(response_meta): Extension<ResponseMeta>,
    request: extract::Request,
) -> response::Response {
    error_response(
        StatusCode::NOT_FOUND,
        "Not found",
        "This route does not exist.",
        Some("path"),
        HashMap::from([("path", json!(request.uri().path()))]),
        response_meta,
    )
}
