use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{self, IntoResponse},
    Extension, Json,
};
use serde_json::json;
use tracing::{event, Level};

use super::{requests::RunPayload, responses::RunResponse};
use crate::{
    error_handlers::error_response,
    flow::FlowError,
    interaction::{self, Interaction, EMPTY_MESSAGE, UNEXPECTED_FORMAT},
    requests::Request,
    responses::{CommonError, Response, ResponseMeta},
    state::AppState,
    utils::text::truncate,
};

pub async fn run(
    Extension(response_meta): Extension<ResponseMeta>,
    State(state): State<AppState>,
    payload: Result<Json<Request<RunPayload>>, JsonRejection>,
) -> response::Response {
    let Json(Request { data: payload }) = match payload {
        Ok(p) => p,
        Err(err) => {
            return CommonError::JsonRejection {
                err,
                meta: response_meta,
            }
            .into_response()
        }
    };

    match interaction::run(&state.flow, &payload.message).await {
        Interaction::Reply(text) => (
            StatusCode::OK,
            Response::new(Some(RunResponse { text }), None, Some(response_meta), None),
        )
            .into_response(),
        Interaction::EmptyMessage => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Empty Message",
            EMPTY_MESSAGE,
            Some("body.data.message"),
            HashMap::from([("input", json!(truncate(&payload.message, 20)))]),
            response_meta,
        ),
        Interaction::Failed(err) => {
            event!(Level::WARN, error = %err, "Flow run failed.");

            match &err {
                FlowError::Http { status, body } => error_response(
                    StatusCode::BAD_GATEWAY,
                    "Flow API Error",
                    &err.to_string(),
                    None,
                    HashMap::from([("status", json!(status)), ("body", json!(body))]),
                    response_meta,
                ),
                FlowError::Transport(description) => error_response(
                    StatusCode::BAD_GATEWAY,
                    "Flow Request Failed",
                    &err.to_string(),
                    None,
                    HashMap::from([("error", json!(description))]),
                    response_meta,
                ),
            }
        }
        Interaction::UnexpectedFormat => error_response(
            StatusCode::BAD_GATEWAY,
            "Unexpected Response Format",
            UNEXPECTED_FORMAT,
            None,
            HashMap::new(),
            response_meta,
        ),
    }
}
