//! 推文实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 推文实体（数据库行）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub id: i64,
    /// 发布者用户名
    pub username: String,
    pub first_name: String,
    /// 推文正文
    pub tweet: String,
    pub tweet_date: DateTime<Utc>,
    pub likes: i64,
    pub image_name: Option<String>,
}

/// 待创建的推文记录
///
/// 发布时间由应用层的时钟打点，点赞数从零开始。
#[derive(Debug, Clone, PartialEq)]
pub struct NewTweet {
    pub username: String,
    pub first_name: String,
    pub tweet: String,
    pub tweet_date: DateTime<Utc>,
    pub image_name: Option<String>,
}

/// 推文列表读取模型
///
/// last_name 由网关从用户表关联取出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTweet {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub tweet: String,
    pub likes: i64,
    pub tweet_date: DateTime<Utc>,
    pub image_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_tweet_wire_shape() {
        let item = UserTweet {
            username: "bijin".to_string(),
            first_name: "Bijin".to_string(),
            last_name: "Kurien".to_string(),
            tweet: "Hello World".to_string(),
            likes: 3,
            tweet_date: Utc::now(),
            image_name: Some("Image.jpg".to_string()),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["tweet"], "Hello World");
        assert_eq!(json["likes"], 3);
        assert_eq!(json["firstName"], "Bijin");
        assert_eq!(json["imageName"], "Image.jpg");
        assert!(json.get("tweetDate").is_some());
    }
}
