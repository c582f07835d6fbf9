//! Web API 层。
//!
//! 提供 Axum 路由，将 HTTP 请求委托给应用层服务，并在成功后做
//! 尽力而为的通知发布。

mod auth;
mod error;
mod routes;
mod state;

pub use auth::{Claims, JwtService, LoginStatus, Token};
pub use config::JwtConfig;
pub use routes::router;
pub use state::AppState;
