use chrono::{Duration, FixedOffset, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::models::otp::OtpRecord;

pub const DEFAULT_CODE_LENGTH: usize = 6;
pub const DEFAULT_OTP_TYPE: &str = "email_verification";
pub const VALIDITY_MINUTES: i64 = 10;

// Records are timestamped in fixed +05:30 civil time, no DST rules.
const UTC_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Generates a numeric code of `length` digits, each independently uniform
/// over 0-9. Thread RNG, not a cryptographic source.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..=9u8)))
        .collect()
}

/// Builds a fresh passcode record for `user_id`. The tag defaults to
/// "email_verification" when not supplied. Persisting and delivering the
/// record is left to the caller.
pub fn create_otp_record(user_id: &str, otp_type: Option<&str>) -> OtpRecord {
    let otp_type = otp_type.unwrap_or(DEFAULT_OTP_TYPE);

    let offset = FixedOffset::east_opt(UTC_OFFSET_SECS).unwrap();
    let created_at = Utc::now().with_timezone(&offset);
    let expires_at = created_at + Duration::minutes(VALIDITY_MINUTES);

    OtpRecord {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        code: generate_code(DEFAULT_CODE_LENGTH),
        otp_type: otp_type.to_string(),
        created_at,
        expires_at,
    }
}
