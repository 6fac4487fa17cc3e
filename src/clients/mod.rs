pub mod health;
pub mod mailer;
pub mod rbmq;
