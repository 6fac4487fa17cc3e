use anyhow::{Error, Result};
use futures_util::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use email_service::{
    api::run_api_server,
    clients::{mailer::MailerClient, rbmq::RabbitMqClient},
    config::Config,
    models::message::QueueRecord,
    utils::process_record,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = Config::load()?;

    let rabbitmq = RabbitMqClient::connect(&config).await?;
    let mailer = MailerClient::new(&config);

    let api_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = run_api_server(api_config).await {
            error!(error = %e, "Health check server terminated");
        }
    });

    let mut consumer = rabbitmq.create_consumer().await?;

    info!(queue = %config.email_queue_name, "Worker started, waiting for messages");

    while let Some(delivery) = consumer.next().await {
        let delivery = match delivery {
            Ok(delivery) => delivery,
            Err(e) => {
                warn!(error = %e, "Failed to receive delivery");
                continue;
            }
        };

        let record = QueueRecord {
            body: String::from_utf8_lossy(&delivery.data).into_owned(),
        };

        let outcome = process_record(&record, &mailer).await;
        info!(outcome = %outcome, "Message processed");

        // At-most-one attempt: acknowledged whatever the outcome, never requeued.
        if let Err(e) = rabbitmq.acknowledge(delivery.delivery_tag).await {
            warn!(error = %e, "Failed to acknowledge message");
        }
    }

    Ok(())
}
