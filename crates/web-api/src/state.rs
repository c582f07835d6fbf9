use std::sync::Arc;

use application::{NotificationPublisher, TweetAppService};

use crate::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub tweet_service: Arc<TweetAppService>,
    pub jwt_service: Arc<JwtService>,
    pub publisher: Arc<dyn NotificationPublisher>,
}

impl AppState {
    pub fn new(
        tweet_service: Arc<TweetAppService>,
        jwt_service: Arc<JwtService>,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            tweet_service,
            jwt_service,
            publisher,
        }
    }
}
