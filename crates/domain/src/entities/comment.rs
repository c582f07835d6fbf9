//! 评论实体定义
//!
//! 评论通过推文文本弱引用目标推文，按字符串相等匹配。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 待创建的评论记录
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub comment: String,
    /// 评论者用户名
    pub username: String,
    /// 评论者显示名
    pub name: String,
    /// 目标推文正文
    pub tweet: String,
    pub comment_date: DateTime<Utc>,
}

/// 评论列表读取模型
///
/// image_name 由网关从评论者的用户行关联取出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserComment {
    pub username: String,
    pub comment: String,
    pub comment_date: DateTime<Utc>,
    pub image_name: Option<String>,
}
