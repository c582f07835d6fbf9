mod tweet_repository_impl;
mod user_repository_impl;

pub use tweet_repository_impl::PostgresTweetRepository;
pub use user_repository_impl::PostgresUserRepository;

use domain::RepositoryError;

/// sqlx 错误映射：唯一约束冲突单独标记，其余归入存储故障。
pub(crate) fn map_db_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict;
        }
    }
    RepositoryError::storage(err.to_string())
}
