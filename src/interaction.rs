//! One chat interaction: validate the message, run the flow, pull out the
//! reply. Shared by the HTML page and the JSON endpoint.

use tracing::{event, Level};

use crate::flow::{extract, FlowClient, FlowError};

pub const EMPTY_MESSAGE: &str = "Please enter a message";
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format. Please check API response.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Reply(String),
    /// Blank input. The flow was not called.
    EmptyMessage,
    Failed(FlowError),
    /// The flow answered 200 but the reply text was not where expected.
    UnexpectedFormat,
}

impl Interaction {
    /// Text of the inline error banner, if the interaction did not produce a
    /// reply.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Reply(_) => None,
            Self::EmptyMessage => Some(EMPTY_MESSAGE.to_string()),
            Self::Failed(err) => Some(err.to_string()),
            Self::UnexpectedFormat => Some(UNEXPECTED_FORMAT.to_string()),
        }
    }
}

pub fn is_blank(message: &str) -> bool {
    message.trim().is_empty()
}

pub async fn run(flow: &FlowClient, message: &str) -> Interaction {
    if is_blank(message) {
        return Interaction::EmptyMessage;
    }

    let response = match flow.invoke(message).await {
        Ok(response) => response,
        Err(err) => return Interaction::Failed(err),
    };

    match extract::message_text(&response) {
        Some(text) => Interaction::Reply(text.to_string()),
        None => {
            event!(Level::WARN, "Flow response had no message text.");
            Interaction::UnexpectedFormat
        }
    }
}
