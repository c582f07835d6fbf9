//! 用户仓储实现

use async_trait::async_trait;
use sqlx::FromRow;

use application::UserRepository;
use domain::{NewUser, RegisteredUser, RepositoryError, User};

use crate::db::repositories::map_db_error;
use crate::db::DbPool;

/// 数据库用户行模型
#[derive(Debug, Clone, FromRow)]
struct DbUser {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub password_hash: String,
    pub image_name: Option<String>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            contact_number: row.contact_number,
            password_hash: row.password_hash,
            image_name: row.image_name,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct DbRegisteredUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub image_name: Option<String>,
}

impl From<DbRegisteredUser> for RegisteredUser {
    fn from(row: DbRegisteredUser) -> Self {
        RegisteredUser {
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            image_name: row.image_name,
        }
    }
}

pub struct PostgresUserRepository {
    pool: DbPool,
}

impl PostgresUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO users (username, first_name, last_name, email, contact_number, password_hash, image_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.contact_number)
        .bind(&user.password_hash)
        .bind(&user.image_name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let result = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, username, first_name, last_name, email, contact_number, password_hash, image_name
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let result = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, username, first_name, last_name, email, contact_number, password_hash, image_name
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<RegisteredUser>, RepositoryError> {
        let rows = sqlx::query_as::<_, DbRegisteredUser>(
            r#"
            SELECT username, first_name, last_name, image_name
            FROM users
            ORDER BY username
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE email = $1")
            .bind(email)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_user_maps_all_fields() {
        let row = DbUser {
            id: 7,
            username: "bijin".to_string(),
            first_name: "Bijin".to_string(),
            last_name: "Kurien".to_string(),
            email: "bijin@example.com".to_string(),
            contact_number: "8871147488".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            image_name: None,
        };

        let user = User::from(row);
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "bijin");
        assert_eq!(user.email, "bijin@example.com");
        assert!(user.image_name.is_none());
    }
}
