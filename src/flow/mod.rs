//! Client for the hosted flow run API.

pub mod extract;
pub mod payload;

use reqwest::{header::CONTENT_TYPE, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{event, Level};

use crate::{config::Config, utils::text::truncate};
use payload::FlowPayload;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The API answered with anything but 200.
    #[error("API Error {status}: {body}")]
    Http { status: u16, body: String },
    /// The request never completed or the body was not JSON.
    #[error("Request failed: {0}")]
    Transport(String),
}

pub type FlowOutcome = Result<Value, FlowError>;

#[derive(Debug, Clone)]
pub struct FlowClient {
    http: reqwest::Client,
    run_url: String,
    token: String,
}

impl FlowClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            run_url: format!(
                "{}/lf/{}/api/v1/run/{}?stream=false",
                config.base_url, config.langflow_id, config.endpoint
            ),
            token: config.app_token.clone(),
        }
    }

    pub fn run_url(&self) -> &str {
        &self.run_url
    }

    /// Runs the flow once with `message` as chat input and returns the parsed
    /// response body.
    pub async fn invoke(&self, message: &str) -> FlowOutcome {
        event!(Level::DEBUG, url = %self.run_url, "Running flow...");

        let response = self
            .http
            .post(&self.run_url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .json(&FlowPayload::chat(message))
            .send()
            .await
            .map_err(|err| {
                event!(Level::WARN, error = %err, "Flow request failed.");
                FlowError::Transport(err.to_string())
            })?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    event!(
                        Level::WARN,
                        status = status.as_u16(),
                        error = %err,
                        "Failed to read flow error body."
                    );
                    format!("<failed to read response body: {err}>")
                }
            };
            event!(
                Level::WARN,
                status = status.as_u16(),
                body = %truncate(&body, 200),
                "Flow API returned an error."
            );
            return Err(FlowError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|err| {
            event!(Level::WARN, error = %err, "Flow response was not JSON.");
            FlowError::Transport(err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> Config {
        let base_url = base_url.to_string();
        Config::from_lookup(move |key| match key {
            "LANGFLOW_ID" => Some("tenant-1".to_string()),
            "APP_TOKEN" => Some("secret".to_string()),
            "LANGFLOW_BASE_URL" => Some(base_url.clone()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn run_url_interpolates_the_tenant() {
        let client = FlowClient::new(&config(""));

        assert_eq!(
            client.run_url(),
            "https://api.langflow.astra.datastax.com/lf/tenant-1/api/v1/run/customer?stream=false"
        );
    }

    #[test]
    fn run_url_honours_base_override() {
        let client = FlowClient::new(&config("http://127.0.0.1:9999/"));

        assert_eq!(
            client.run_url(),
            "http://127.0.0.1:9999/lf/tenant-1/api/v1/run/customer?stream=false"
        );
    }

    #[test]
    fn diagnostics() {
        let http = FlowError::Http {
            status: 500,
            body: "server error".to_string(),
        };
        let transport = FlowError::Transport("connection refused".to_string());

        assert_eq!(http.to_string(), "API Error 500: server error");
        assert_eq!(transport.to_string(), "Request failed: connection refused");
    }
}
