use std::collections::HashSet;

use anyhow::Result;
use chrono::{Duration, FixedOffset};
use email_service::otp::{
    DEFAULT_CODE_LENGTH, DEFAULT_OTP_TYPE, VALIDITY_MINUTES, create_otp_record, generate_code,
};

/// Test: Generated codes have exactly the requested number of digit characters
#[test]
fn test_generate_code_length_and_digits() -> Result<()> {
    for length in [1, 4, DEFAULT_CODE_LENGTH, 8, 12] {
        let code = generate_code(length);

        assert_eq!(code.len(), length, "Code should be {} characters", length);
        assert!(
            code.chars().all(|c| c.is_ascii_digit()),
            "Code should contain only digits: {}",
            code
        );
    }

    Ok(())
}

/// Test: Every digit value shows up across many generated codes
#[test]
fn test_generate_code_covers_all_digits() -> Result<()> {
    let mut seen = HashSet::new();

    for _ in 0..500 {
        for c in generate_code(DEFAULT_CODE_LENGTH).chars() {
            seen.insert(c);
        }
    }

    for digit in '0'..='9' {
        assert!(seen.contains(&digit), "Digit {} never generated", digit);
    }

    Ok(())
}

/// Test: The expiry window is exactly ten minutes after creation
#[test]
fn test_record_expiry_window_is_exact() -> Result<()> {
    let record = create_otp_record("user_123", None);

    assert_eq!(
        record.expires_at - record.created_at,
        Duration::minutes(VALIDITY_MINUTES),
        "Expiry must be exactly {} minutes after creation",
        VALIDITY_MINUTES
    );

    Ok(())
}

/// Test: Timestamps are issued in the fixed +05:30 offset
#[test]
fn test_record_timestamps_use_fixed_offset() -> Result<()> {
    let expected_offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();

    let record = create_otp_record("user_123", None);

    assert_eq!(*record.created_at.offset(), expected_offset);
    assert_eq!(*record.expires_at.offset(), expected_offset);

    Ok(())
}

/// Test: Each record carries a distinct id
#[test]
fn test_record_ids_are_unique() -> Result<()> {
    let ids: HashSet<_> = (0..100)
        .map(|_| create_otp_record("user_123", None).id)
        .collect();

    assert_eq!(ids.len(), 100, "Ids must be unique across calls");

    Ok(())
}

/// Test: The type tag defaults to email verification and accepts overrides
#[test]
fn test_record_type_tag_defaulting() -> Result<()> {
    let defaulted = create_otp_record("user_123", None);
    assert_eq!(defaulted.otp_type, DEFAULT_OTP_TYPE);

    let overridden = create_otp_record("user_123", Some("password_reset"));
    assert_eq!(overridden.otp_type, "password_reset");

    Ok(())
}

/// Test: Records carry the caller-supplied owner and a default-length code
#[test]
fn test_record_owner_and_code_shape() -> Result<()> {
    let record = create_otp_record("user_456", None);

    assert_eq!(record.user_id, "user_456");
    assert_eq!(record.code.len(), DEFAULT_CODE_LENGTH);
    assert!(record.code.chars().all(|c| c.is_ascii_digit()));

    Ok(())
}
