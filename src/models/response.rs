use serde::Serialize;

/// Batch-level acknowledgment returned to the trigger. Always reports
/// success; per-message outcomes are only observable through logs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl BatchResponse {
    pub fn processed() -> Self {
        Self {
            status_code: 200,
            body: "All emails processed.".to_string(),
        }
    }
}
