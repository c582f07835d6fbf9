use std::sync::Arc;

use domain::{NewComment, NewTweet, NewUser, RegisteredUser, User, UserComment, UserTweet};

use crate::{
    clock::Clock,
    error::ApplicationError,
    password::PasswordHasher,
    repository::{TweetRepository, UserRepository},
};

/// 写操作的业务结果。
///
/// 旧接口的固定字面量（"Posted"、"Deleted" 等）只在 Web 层序列化时出现，
/// 调用方和测试不依赖具体字符串。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutcome {
    Success,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub password: String,
    pub image_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PostTweetRequest {
    pub username: String,
    pub first_name: String,
    pub tweet: String,
    pub image_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PostCommentRequest {
    pub comment: String,
    pub username: String,
    pub name: String,
    pub tweet: String,
}

pub struct TweetAppServiceDependencies {
    pub user_repository: Arc<dyn UserRepository>,
    pub tweet_repository: Arc<dyn TweetRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
}

/// 推文应用服务。
///
/// 每个操作编排一次持久化网关往返；网关故障不做恢复，原样向上传播。
pub struct TweetAppService {
    deps: TweetAppServiceDependencies,
}

impl TweetAppService {
    pub fn new(deps: TweetAppServiceDependencies) -> Self {
        Self { deps }
    }

    pub async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<OperationOutcome, ApplicationError> {
        let password_hash = self.deps.password_hasher.hash(&request.password).await?;
        self.deps
            .user_repository
            .create(NewUser {
                username: request.username,
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                contact_number: request.contact_number,
                password_hash,
                image_name: request.image_name,
            })
            .await?;
        Ok(OperationOutcome::Success)
    }

    /// 凭据无效时返回 `None`，不是错误。
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, ApplicationError> {
        let Some(user) = self.deps.user_repository.find_by_username(username).await? else {
            return Ok(None);
        };
        let password_ok = self
            .deps
            .password_hasher
            .verify(password, &user.password_hash)
            .await?;
        Ok(password_ok.then_some(user))
    }

    pub async fn post_tweet(
        &self,
        request: PostTweetRequest,
    ) -> Result<OperationOutcome, ApplicationError> {
        self.deps
            .tweet_repository
            .create(NewTweet {
                username: request.username,
                first_name: request.first_name,
                tweet: request.tweet,
                tweet_date: self.deps.clock.now(),
                image_name: request.image_name,
            })
            .await?;
        Ok(OperationOutcome::Success)
    }

    /// 网关是推文是否存在的唯一事实来源；只要删除调用完成即算成功。
    pub async fn delete_tweet(
        &self,
        username: &str,
        tweet: &str,
    ) -> Result<OperationOutcome, ApplicationError> {
        self.deps.tweet_repository.delete(username, tweet).await?;
        Ok(OperationOutcome::Success)
    }

    pub async fn get_all_users(&self) -> Result<Vec<RegisteredUser>, ApplicationError> {
        Ok(self.deps.user_repository.list_all().await?)
    }

    pub async fn get_tweets_by_user(
        &self,
        username: &str,
    ) -> Result<Vec<UserTweet>, ApplicationError> {
        Ok(self.deps.tweet_repository.list_by_user(username).await?)
    }

    pub async fn get_all_tweets(&self) -> Result<Vec<UserTweet>, ApplicationError> {
        Ok(self.deps.tweet_repository.list_all().await?)
    }

    pub async fn get_comments(
        &self,
        username: &str,
        tweet: &str,
    ) -> Result<Vec<UserComment>, ApplicationError> {
        Ok(self
            .deps
            .tweet_repository
            .list_comments(username, tweet)
            .await?)
    }

    pub async fn get_user_profile(
        &self,
        username: &str,
    ) -> Result<Option<User>, ApplicationError> {
        Ok(self.deps.user_repository.find_by_username(username).await?)
    }

    /// 旧密码校验在这一层完成（哈希存储后 SQL 无法做字符串比较）。
    pub async fn update_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<OperationOutcome, ApplicationError> {
        let Some(user) = self.deps.user_repository.find_by_email(email).await? else {
            return Ok(OperationOutcome::NotFound);
        };
        let old_ok = self
            .deps
            .password_hasher
            .verify(old_password, &user.password_hash)
            .await?;
        if !old_ok {
            return Ok(OperationOutcome::NotFound);
        }

        let password_hash = self.deps.password_hasher.hash(new_password).await?;
        self.deps
            .user_repository
            .update_password_hash(email, &password_hash)
            .await?;
        Ok(OperationOutcome::Success)
    }

    /// 不校验旧密码；邮箱未命中任何用户时返回 `NotFound`。
    pub async fn forgot_password(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<OperationOutcome, ApplicationError> {
        let password_hash = self.deps.password_hasher.hash(new_password).await?;
        let updated = self
            .deps
            .user_repository
            .update_password_hash(email, &password_hash)
            .await?;
        if updated == 0 {
            return Ok(OperationOutcome::NotFound);
        }
        Ok(OperationOutcome::Success)
    }

    pub async fn post_comment(
        &self,
        request: PostCommentRequest,
    ) -> Result<u64, ApplicationError> {
        Ok(self
            .deps
            .tweet_repository
            .create_comment(NewComment {
                comment: request.comment,
                username: request.username,
                name: request.name,
                tweet: request.tweet,
                comment_date: self.deps.clock.now(),
            })
            .await?)
    }

    /// 读取当前点赞计数，无副作用；无匹配推文时网关返回 0。
    pub async fn likes(&self, username: &str, tweet: &str) -> Result<i64, ApplicationError> {
        Ok(self.deps.tweet_repository.like_count(username, tweet).await?)
    }
}
