//! 基础设施层。
//!
//! 持久化网关的 PostgreSQL 实现、Kafka 通知发布器与 bcrypt 密码哈希。

pub mod db;
pub mod kafka;
pub mod password;

pub use db::repositories::{PostgresTweetRepository, PostgresUserRepository};
pub use db::{create_pool, DbPool};
pub use kafka::{KafkaError, KafkaNotificationPublisher, KafkaResult};
pub use password::BcryptPasswordHasher;
