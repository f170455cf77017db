use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::TWEAKS;

pub const CHAT: &str = "chat";

/// Body of a flow run request.
#[derive(Debug, Serialize)]
pub struct FlowPayload<'a> {
    pub input_value: &'a str,
    pub output_type: &'static str,
    pub input_type: &'static str,
    pub tweaks: &'static Map<String, Value>,
}

impl<'a> FlowPayload<'a> {
    /// Chat-in, chat-out run. `message` is sent exactly as typed.
    pub fn chat(message: &'a str) -> Self {
        Self {
            input_value: message,
            output_type: CHAT,
            input_type: CHAT,
            tweaks: &*TWEAKS,
        }
    }
}
