//! 持久化网关接口。
//!
//! 存储关心的一切（排序、关联、存在性）都由网关负责；
//! 应用层只做结果映射。

use async_trait::async_trait;
use domain::{
    NewComment, NewTweet, NewUser, RegisteredUser, RepositoryError, User, UserComment, UserTweet,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<(), RepositoryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<RegisteredUser>, RepositoryError>;
    /// 返回受影响的行数，0 表示邮箱未命中任何用户。
    async fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<u64, RepositoryError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetRepository: Send + Sync {
    async fn create(&self, tweet: NewTweet) -> Result<(), RepositoryError>;
    /// 按（用户名，推文正文）精确匹配删除；不存在的推文删除 0 行也算成功。
    async fn delete(&self, username: &str, tweet: &str) -> Result<(), RepositoryError>;
    async fn list_all(&self) -> Result<Vec<UserTweet>, RepositoryError>;
    async fn list_by_user(&self, username: &str) -> Result<Vec<UserTweet>, RepositoryError>;
    async fn list_comments(
        &self,
        username: &str,
        tweet: &str,
    ) -> Result<Vec<UserComment>, RepositoryError>;
    /// 返回插入的行数。
    async fn create_comment(&self, comment: NewComment) -> Result<u64, RepositoryError>;
    /// 当前点赞计数；无匹配推文时为 0。
    async fn like_count(&self, username: &str, tweet: &str) -> Result<i64, RepositoryError>;
}
