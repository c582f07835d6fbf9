//! 主应用程序入口
//!
//! 启动 TweetApp Web API 服务。

use std::sync::Arc;

use application::{
    Clock, NotificationPublisher, PasswordHasher, SystemClock, TweetAppService,
    TweetAppServiceDependencies,
};
use config::AppConfig;
use infrastructure::{
    create_pool, BcryptPasswordHasher, KafkaNotificationPublisher, PostgresTweetRepository,
    PostgresUserRepository,
};
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env_with_defaults();
    config.validate()?;

    tracing::info!(
        "连接数据库: {}",
        config.database.url.split('@').last().unwrap_or("unknown")
    );
    let pool = create_pool(&config.database.url, config.database.max_connections).await?;

    // 运行迁移
    sqlx::migrate!("../../migrations").run(&pool).await?;

    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let tweet_repository = Arc::new(PostgresTweetRepository::new(pool));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let tweet_service = TweetAppService::new(TweetAppServiceDependencies {
        user_repository,
        tweet_repository,
        password_hasher,
        clock,
    });

    let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));

    // 通知发布器在进程启动时创建一次，生命周期随进程
    let publisher: Arc<dyn NotificationPublisher> =
        Arc::new(KafkaNotificationPublisher::new(&config.kafka)?);

    let state = AppState::new(Arc::new(tweet_service), jwt_service, publisher);

    let app = router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("TweetApp 服务器启动在 http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
