//! 推文与评论仓储实现
//!
//! 列表操作的排序与用户表关联在 SQL 内完成，应用层不再加工。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use application::TweetRepository;
use domain::{NewComment, NewTweet, RepositoryError, UserComment, UserTweet};

use crate::db::repositories::map_db_error;
use crate::db::DbPool;

#[derive(Debug, Clone, FromRow)]
struct DbUserTweet {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub tweet: String,
    pub likes: i64,
    pub tweet_date: DateTime<Utc>,
    pub image_name: Option<String>,
}

impl From<DbUserTweet> for UserTweet {
    fn from(row: DbUserTweet) -> Self {
        UserTweet {
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            tweet: row.tweet,
            likes: row.likes,
            tweet_date: row.tweet_date,
            image_name: row.image_name,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct DbUserComment {
    pub username: String,
    pub comment: String,
    pub comment_date: DateTime<Utc>,
    pub image_name: Option<String>,
}

impl From<DbUserComment> for UserComment {
    fn from(row: DbUserComment) -> Self {
        UserComment {
            username: row.username,
            comment: row.comment,
            comment_date: row.comment_date,
            image_name: row.image_name,
        }
    }
}

const USER_TWEET_SELECT: &str = r#"
    SELECT t.username, t.first_name, u.last_name, t.tweet, t.likes, t.tweet_date, t.image_name
    FROM tweets t
    JOIN users u ON u.username = t.username
"#;

pub struct PostgresTweetRepository {
    pool: DbPool,
}

impl PostgresTweetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetRepository for PostgresTweetRepository {
    async fn create(&self, tweet: NewTweet) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO tweets (username, first_name, tweet, tweet_date, image_name)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&tweet.username)
        .bind(&tweet.first_name)
        .bind(&tweet.tweet)
        .bind(tweet.tweet_date)
        .bind(&tweet.image_name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn delete(&self, username: &str, tweet: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM tweets WHERE username = $1 AND tweet = $2")
            .bind(username)
            .bind(tweet)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<UserTweet>, RepositoryError> {
        let query = format!("{USER_TWEET_SELECT} ORDER BY t.tweet_date DESC");
        let rows = sqlx::query_as::<_, DbUserTweet>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_user(&self, username: &str) -> Result<Vec<UserTweet>, RepositoryError> {
        let query = format!("{USER_TWEET_SELECT} WHERE t.username = $1 ORDER BY t.tweet_date DESC");
        let rows = sqlx::query_as::<_, DbUserTweet>(&query)
            .bind(username)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_comments(
        &self,
        username: &str,
        tweet: &str,
    ) -> Result<Vec<UserComment>, RepositoryError> {
        // 评论按推文文本弱引用；头像从评论者的用户行取
        let rows = sqlx::query_as::<_, DbUserComment>(
            r#"
            SELECT c.username, c.comment, c.comment_date, u.image_name
            FROM comments c
            LEFT JOIN users u ON u.username = c.username
            WHERE c.tweet = $2
              AND EXISTS (SELECT 1 FROM tweets t WHERE t.username = $1 AND t.tweet = $2)
            ORDER BY c.comment_date
            "#,
        )
        .bind(username)
        .bind(tweet)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_comment(&self, comment: NewComment) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO comments (comment, username, name, tweet, comment_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&comment.comment)
        .bind(&comment.username)
        .bind(&comment.name)
        .bind(&comment.tweet)
        .bind(comment.comment_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    async fn like_count(&self, username: &str, tweet: &str) -> Result<i64, RepositoryError> {
        let likes: Option<i64> =
            sqlx::query_scalar("SELECT likes FROM tweets WHERE username = $1 AND tweet = $2")
                .bind(username)
                .bind(tweet)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(likes.unwrap_or(0))
    }
}
