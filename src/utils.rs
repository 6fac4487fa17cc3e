use tracing::{info, warn};

use crate::{
    clients::mailer::MailerClient,
    models::{
        message::{DEFAULT_BODY, DEFAULT_SUBJECT, EmailRequest, QueueRecord},
        outcome::DeliveryOutcome,
        response::BatchResponse,
    },
};

/// Processes a single queue record: parse, validate the recipient, apply
/// defaults, dispatch. Never returns an error; every failure mode collapses
/// into a logged outcome so the next record still runs.
pub async fn process_record(record: &QueueRecord, mailer: &MailerClient) -> DeliveryOutcome {
    info!("Raw message body: {}", record.body);

    let request = match serde_json::from_str::<EmailRequest>(&record.body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Failed to parse message body, skipping");
            return DeliveryOutcome::Failed {
                error: format!("Malformed message body: {}", e),
            };
        }
    };

    let to_address = match request.email.as_deref() {
        Some(address) if !address.is_empty() => address,
        _ => {
            warn!("Missing email address in message, skipping");
            return DeliveryOutcome::Skipped {
                reason: "Missing email address".to_string(),
            };
        }
    };

    let subject = request.subject.as_deref().unwrap_or(DEFAULT_SUBJECT);
    let body = request.message.as_deref().unwrap_or(DEFAULT_BODY);

    match mailer.send_email(to_address, subject, body).await {
        Ok(message_id) => {
            info!(to_address, message_id = %message_id, "Email sent");
            DeliveryOutcome::Sent { message_id }
        }
        Err(e) => {
            warn!(to_address, error = %e, "Failed to send email");
            DeliveryOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

/// Processes a batch strictly in order and acknowledges it as a whole. The
/// returned response is fixed; per-record outcomes surface only in logs.
pub async fn process_batch(records: &[QueueRecord], mailer: &MailerClient) -> BatchResponse {
    info!(record_count = records.len(), "Batch received");

    let mut outcomes = Vec::with_capacity(records.len());

    for record in records {
        let outcome = process_record(record, mailer).await;
        info!(outcome = %outcome, "Record processed");
        outcomes.push(outcome);
    }

    let sent = outcomes.iter().filter(|outcome| outcome.is_sent()).count();

    info!(total = outcomes.len(), sent, "Batch processed");

    BatchResponse::processed()
}
