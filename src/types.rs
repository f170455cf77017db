#[derive(Debug, Clone)]
pub struct RequestID(pub String);
