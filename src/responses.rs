use std::collections::HashMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{self, IntoResponse},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{event, Level};

/// Per-request metadata echoed in every JSON envelope.
pub type ResponseMeta = HashMap<&'static str, Value>;

#[derive(Debug, Serialize)]
pub struct Response<T> {
    data: Option<T>,
    errors: Vec<Error>,
    meta: HashMap<String, Value>,
    links: HashMap<String, String>,
}

impl<T> Response<T> {
    pub fn new(
        data: Option<T>,
        errors: Option<Vec<Error>>,
        meta: Option<ResponseMeta>,
        links: Option<HashMap<&str, &str>>,
    ) -> Self {
        Self {
            data,
            errors: errors.unwrap_or_default(),
            meta: meta
                .unwrap_or_default()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            links: links
                .unwrap_or_default()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> response::Response {
        Json(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct Error {
    pub code: u16,
    pub message: String,
    pub detail: String,
    pub location: Option<String>,
    pub meta: HashMap<String, Value>,
}

impl Error {
    pub fn new(
        code: u16,
        message: &str,
        detail: &str,
        location: Option<&str>,
        meta: HashMap<&str, Value>,
    ) -> Self {
        Self {
            code,
            message: message.to_string(),
            detail: detail.to_string(),
            location: location.map(str::to_string),
            meta: meta.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

pub enum CommonError {
    JsonRejection {
        err: JsonRejection,
        meta: ResponseMeta,
    },
    InternalServerError {
        request_id: String,
    },
}

impl IntoResponse for CommonError {
    fn into_response(self) -> response::Response {
        let (status, error, meta) = match self {
            Self::JsonRejection {
                err: JsonRejection::MissingJsonContentType(err),
                meta,
            } => (
                err.status(),
                Error::new(
                    err.status().as_u16(),
                    "Missing JSON Content-Type Header",
                    "The request must contain a Content-Type: application/json header.",
                    Some("headers.content_type"),
                    HashMap::new(),
                ),
                meta,
            ),
            Self::JsonRejection {
                err: JsonRejection::JsonDataError(err),
                meta,
            } => (
                err.status(),
                Error::new(
                    err.status().as_u16(),
                    "Invalid Request Body Schema",
                    "The request body doesn't follow the endpoint's schema.",
                    Some("body"),
                    HashMap::from([("reason", json!(err.body_text()))]),
                ),
                meta,
            ),
            Self::JsonRejection {
                err: JsonRejection::JsonSyntaxError(err),
                meta,
            } => (
                err.status(),
                Error::new(
                    err.status().as_u16(),
                    "Invalid JSON Syntax",
                    "The request body contains invalid JSON.",
                    Some("body"),
                    HashMap::new(),
                ),
                meta,
            ),
            Self::JsonRejection {
                err: JsonRejection::BytesRejection(err),
                meta,
            } => (
                err.status(),
                Error::new(
                    err.status().as_u16(),
                    "Bytes Rejection",
                    "The request body's JSON could not be extracted.",
                    Some("body"),
                    HashMap::new(),
                ),
                meta,
            ),
            Self::JsonRejection { meta, .. } => (
                StatusCode::BAD_REQUEST,
                Error::new(
                    StatusCode::BAD_REQUEST.as_u16(),
                    "Unknown JSON Error",
                    "An unknown error occurred parsing the request body's JSON.",
                    Some("body"),
                    HashMap::new(),
                ),
                meta,
            ),
            Self::InternalServerError { request_id } => {
                event!(Level::ERROR, request_id = %request_id, "Internal server error.");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Error::new(
                        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                        "Internal Server Error",
                        "The server failed to render a response. Try again later.",
                        None,
                        HashMap::new(),
                    ),
                    HashMap::from([("request_id", json!(request_id))]),
                )
            }
        };

        (
            status,
            Response::<Value>::new(None, Some(vec![error]), Some(meta), None),
        )
            .into_response()
    }
}
