use std::fmt::{Display, Formatter, Result};

/// Per-message processing result. Failures never propagate past the record
/// that produced them; they are collected and logged instead.
#[derive(Debug, Clone)]
pub enum DeliveryOutcome {
    Sent { message_id: String },
    Skipped { reason: String },
    Failed { error: String },
}

impl DeliveryOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, DeliveryOutcome::Sent { .. })
    }
}

impl Display for DeliveryOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DeliveryOutcome::Sent { message_id } => write!(f, "sent ({})", message_id),
            DeliveryOutcome::Skipped { reason } => write!(f, "skipped ({})", reason),
            DeliveryOutcome::Failed { error } => write!(f, "failed ({})", error),
        }
    }
}
