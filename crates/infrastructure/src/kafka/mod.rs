//! Kafka 通知模块
//!
//! 提供固定主题的尽力而为通知发布器。

pub mod error;
pub mod producer;

pub use error::{KafkaError, KafkaResult};
pub use producer::KafkaNotificationPublisher;
