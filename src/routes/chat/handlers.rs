use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Response},
    Extension, Form,
};
use tracing::{event, Level};

use super::{render::Page, requests::ChatForm};
use crate::{
    interaction::{self, Interaction},
    responses::CommonError,
    state::AppState,
    types::RequestID,
    utils::text::truncate,
};

pub async fn index(
    Extension(RequestID(request_id)): Extension<RequestID>,
    State(state): State<AppState>,
) -> Response {
    page(&state, &Page::default(), request_id)
}

pub async fn run(
    Extension(RequestID(request_id)): Extension<RequestID>,
    State(state): State<AppState>,
    form: Result<Form<ChatForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(err) => {
            event!(Level::WARN, request_id = %request_id, error = %err, "Rejected chat form.");

            return (
                err.status(),
                page(&state, &Page::rejected(err.body_text()), request_id),
            )
                .into_response();
        }
    };

    event!(
        Level::INFO,
        request_id = %request_id,
        message = %truncate(&form.message, 40),
        "Chat submitted."
    );

    let interaction = interaction::run(&state.flow, &form.message).await;

    if let Interaction::Failed(err) = &interaction {
        event!(Level::WARN, request_id = %request_id, error = %err, "Flow run failed.");
    }

    page(
        &state,
        &Page::from_interaction(&form.message, &interaction),
        request_id,
    )
}

fn page(state: &AppState, page: &Page<'_>, request_id: String) -> Response {
    match page.render(&state.templates) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            event!(Level::ERROR, error = %err, "Failed to render page.");
            CommonError::InternalServerError { request_id }.into_response()
        }
    }
}
