//! Kafka 通知发布器
//!
//! 生产者在进程启动时创建一次，所有请求共享；发布失败不重试，
//! 由调用方记录日志后忽略。

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use tracing::info;

use application::{NotificationPublisher, PublishError};
use config::KafkaConfig;

use crate::kafka::{KafkaError, KafkaResult};

/// 固定主题的通知发布器
pub struct KafkaNotificationPublisher {
    producer: FutureProducer,
    topic: String,
    send_timeout: Duration,
}

impl KafkaNotificationPublisher {
    pub fn new(config: &KafkaConfig) -> KafkaResult<Self> {
        let mut client_config = ClientConfig::new();
        client_config
            .set("bootstrap.servers", config.brokers.join(","))
            .set("message.timeout.ms", config.send_timeout_ms.to_string());

        let producer: FutureProducer =
            client_config
                .create()
                .map_err(|e| KafkaError::ConfigError {
                    message: format!("创建 Kafka 生产者失败: {}", e),
                })?;

        info!("Kafka 生产者创建成功，连接到: {}", config.brokers.join(","));

        Ok(Self {
            producer,
            topic: config.topic.clone(),
            send_timeout: Duration::from_millis(config.send_timeout_ms as u64),
        })
    }

    async fn send(&self, payload: &str) -> KafkaResult<()> {
        // 自由文本负载，无分区键
        let record = FutureRecord::<(), _>::to(&self.topic).payload(payload);

        self.producer
            .send(record, Timeout::After(self.send_timeout))
            .await
            .map(|_| ())
            .map_err(|(err, _)| KafkaError::ProducerError {
                message: err.to_string(),
            })
    }
}

#[async_trait]
impl NotificationPublisher for KafkaNotificationPublisher {
    async fn publish(&self, message: &str) -> Result<(), PublishError> {
        self.send(message)
            .await
            .map_err(|err| PublishError::send(err.to_string()))
    }
}
