mod tweet_service;

pub use tweet_service::{
    OperationOutcome, PostCommentRequest, PostTweetRequest, RegisterUserRequest, TweetAppService,
    TweetAppServiceDependencies,
};
