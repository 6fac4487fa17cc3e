use serde::{Deserialize, Serialize};

/// A single queue delivery, carrying the raw JSON payload published upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueRecord {
    pub body: String,
}

/// Parsed message body. A missing `email` is not a parse error, so the
/// missing-recipient case stays distinguishable from malformed JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

pub const DEFAULT_SUBJECT: &str = "Test Email from AWS Lambda (Python)";
pub const DEFAULT_BODY: &str = "Hello! This is a test email from Lambda via SES (Python).";
