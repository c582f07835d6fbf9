//! Kafka 错误类型定义

use thiserror::Error;

/// Kafka 操作错误
#[derive(Error, Debug)]
pub enum KafkaError {
    /// 生产者错误
    #[error("Kafka 生产者错误: {message}")]
    ProducerError { message: String },

    /// 配置错误
    #[error("配置错误: {message}")]
    ConfigError { message: String },
}

/// Kafka 结果类型
pub type KafkaResult<T> = Result<T, KafkaError>;
