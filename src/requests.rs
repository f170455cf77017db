use serde::Deserialize;

/// JSON request envelope. Payloads live under `data`.
#[derive(Debug, Deserialize)]
pub struct Request<T> {
    pub data: T,
}
