//! 持久化网关错误定义

use thiserror::Error;

/// 持久化网关错误类型
///
/// "未找到" 不是错误：查询操作用 `Option` / 行数表达缺失。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    /// 唯一约束冲突
    #[error("resource already exists")]
    Conflict,

    /// 存储层故障（连接、约束之外的数据库错误）
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
