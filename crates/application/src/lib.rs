//! 应用服务层。
//!
//! 编排业务操作：每个操作对应一次持久化网关往返，并把结果（或缺失）
//! 映射为显式的结果类型。固定字面量字符串只在 Web 层的序列化边界出现。

pub mod clock;
pub mod error;
pub mod password;
pub mod publisher;
pub mod repository;
pub mod services;

pub use clock::{Clock, SystemClock};
pub use error::ApplicationError;
pub use password::{PasswordHasher, PasswordHasherError};
pub use publisher::{NotificationPublisher, PublishError};
pub use repository::{TweetRepository, UserRepository};
pub use services::{
    OperationOutcome, PostCommentRequest, PostTweetRequest, RegisterUserRequest, TweetAppService,
    TweetAppServiceDependencies,
};
