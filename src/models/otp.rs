use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One-time passcode record. Construction only; storage, delivery and
/// verification belong to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRecord {
    pub id: Uuid,
    pub user_id: String,
    pub code: String,

    #[serde(rename = "type")]
    pub otp_type: String,

    pub created_at: DateTime<FixedOffset>,
    pub expires_at: DateTime<FixedOffset>,
}
