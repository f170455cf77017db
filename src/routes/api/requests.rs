use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RunPayload {
    pub message: String,
}
