use std::sync::LazyLock;

use serde_json::{Map, Value};

/// Host serving the hosted flow API.
pub const BASE_API_URL: &str = "https://api.langflow.astra.datastax.com";

/// Endpoint name of the flow.
pub const ENDPOINT: &str = "customer";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub const REQUEST_BODY_LIMIT: usize = 64 * 1024;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Node identifiers of the remote flow graph. They are opaque to this service.
pub const TWEAK_NODES: [&str; 13] = [
    "ChatOutput-SNVSp",
    "ChatInput-bqPPa",
    "Prompt-ToZGf",
    "Agent-REFuX",
    "AstraDB-ESgTx",
    "ParseData-oj0EM",
    "File-xaSvO",
    "SplitText-Awh1z",
    "AstraDB-GCmkd",
    "Agent-T8EbC",
    "Agent-2jlQc",
    "AstraDBToolComponent-s3AGY",
    "AstraDBToolComponent-UG8h3",
];

pub static TWEAKS: LazyLock<Map<String, Value>> = LazyLock::new(empty_tweaks);

/// Builds the `tweaks` object sent with every run: one empty override per node.
fn empty_tweaks() -> Map<String, Value> {
    TWEAK_NODES
        .iter()
        .map(|node| (node.to_string(), Value::Object(Map::new())))
        .collect()
}
