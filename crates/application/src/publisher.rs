//! 尽力而为的通知发布。
//!
//! 发布失败不影响主流程：调用方记录日志后丢弃错误，不做重试。

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("publish error: {message}")]
    Send { message: String },
}

impl PublishError {
    pub fn send(message: impl Into<String>) -> Self {
        Self::Send {
            message: message.into(),
        }
    }
}

/// 通知发布器
///
/// 实现方在进程启动时创建一次并注入，不做每次调用的连接获取。
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    async fn publish(&self, message: &str) -> Result<(), PublishError>;
}
