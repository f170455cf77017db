use serde::Serialize;

#[derive(Serialize)]
pub struct RunResponse {
    pub text: String,
}
