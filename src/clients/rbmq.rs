use anyhow::{Error, Result, anyhow};
use lapin::{
    Channel, Connection, ConnectionProperties, Consumer,
    options::{BasicAckOptions, BasicConsumeOptions, BasicQosOptions, QueueDeclareOptions},
    types::FieldTable,
};

use crate::config::Config;

pub struct RabbitMqClient {
    channel: Channel,
    email_queue_name: String,
}

impl RabbitMqClient {
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        println!("Connecting to RabbitMQ...");

        let connection = Connection::connect(&config.amqp_url, ConnectionProperties::default())
            .await
            .map_err(|_| anyhow!("Failed to connect to RabbitMQ"))?;

        println!("RabbitMQ connection established");

        let channel = connection
            .create_channel()
            .await
            .map_err(|_| anyhow!("RabbitMQ channel creation failed"))?;

        channel
            .basic_qos(config.prefetch_count, BasicQosOptions::default())
            .await
            .map_err(|_| anyhow!("Failed to set up QoS"))?;

        channel
            .queue_declare(
                &config.email_queue_name,
                QueueDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|_| anyhow!("Failed to declare email queue"))?;

        println!("Email queue declared");

        Ok(Self {
            channel,
            email_queue_name: config.email_queue_name.clone(),
        })
    }

    pub async fn create_consumer(&self) -> Result<Consumer, Error> {
        let consumer = self
            .channel
            .basic_consume(
                &self.email_queue_name,
                "email_worker",
                BasicConsumeOptions::default(),
                FieldTable::default(),
            )
            .await
            .map_err(|_| anyhow!("Failed to create consumer"))?;

        println!("Consumer created for queue");

        Ok(consumer)
    }

    pub async fn acknowledge(&self, delivery_tag: u64) -> Result<(), Error> {
        self.channel
            .basic_ack(delivery_tag, BasicAckOptions::default())
            .await
            .map_err(|_| anyhow!("Failed to acknowledge message"))?;

        Ok(())
    }
}
