use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use application::{OperationOutcome, PostCommentRequest, PostTweetRequest, RegisterUserRequest};
use domain::{RegisteredUser, User, UserComment, UserTweet};

use crate::auth::Token;
use crate::{error::ApiError, state::AppState};

// 与既有客户端兼容的固定结果字面量（包括历史拼写），只出现在这条序列化边界上。
const REGISTERED: &str = "Successfully registerd";
const POSTED: &str = "Posted";
const DELETED: &str = "Deleted";
const PASSWORD_UPDATED: &str = "Updated Successfully";
const PASSWORD_CHANGED: &str = "Changed Password";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterPayload {
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    contact_number: String,
    password: String,
    image_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TweetPayload {
    username: String,
    first_name: String,
    tweet: String,
    image_name: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1.0/tweets", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login/{username}/{password}", get(login))
        .route("/tweet", post(post_tweet))
        .route("/tweetdelete/{username}/{tweet}", delete(delete_tweet))
        .route("/users/all", get(get_all_users))
        .route("/user/search/{username}", get(get_tweets_by_user))
        .route("/all", get(get_all_tweets))
        .route("/allcomments/{username}/{tweet}", get(get_all_comments))
        .route("/user/{username}", get(get_user_profile))
        .route(
            "/update/{email}/{old_password}/{new_password}",
            put(update_password),
        )
        .route("/forgot/{email}/{password}", put(forgot_password))
        .route("/reply/{comment}/{username}/{name}/{tweet}", post(post_comment))
        .route("/likes/{username}/{tweet}", get(get_likes))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// 尽力而为的通知发布：失败只记录日志，不影响请求结果。
async fn notify(state: &AppState, message: String) {
    if let Err(err) = state.publisher.publish(&message).await {
        tracing::warn!(error = %err, "notification publish failed");
    }
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<Json<&'static str>, ApiError> {
    let username = payload.username.clone();
    state
        .tweet_service
        .register(RegisterUserRequest {
            username: payload.username,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            contact_number: payload.contact_number,
            password: payload.password,
            image_name: payload.image_name,
        })
        .await?;

    notify(&state, format!("{} Registered Successfully!", username)).await;

    Ok(Json(REGISTERED))
}

async fn login(
    State(state): State<AppState>,
    Path((username, password)): Path<(String, String)>,
) -> Result<Json<Token>, ApiError> {
    let result = state.tweet_service.login(&username, &password).await?;

    let token = match result {
        Some(user) => {
            let signed = state.jwt_service.generate_token(&user.username)?;
            Token::success(user.id, user.username, signed)
        }
        None => Token::unsuccess(),
    };

    // 与既有行为一致：无论登录是否成功都发布通知
    notify(&state, format!("{} logged in!", username)).await;

    Ok(Json(token))
}

async fn post_tweet(
    State(state): State<AppState>,
    Json(payload): Json<TweetPayload>,
) -> Result<Json<&'static str>, ApiError> {
    let tweet = payload.tweet.clone();
    state
        .tweet_service
        .post_tweet(PostTweetRequest {
            username: payload.username,
            first_name: payload.first_name,
            tweet: payload.tweet,
            image_name: payload.image_name,
        })
        .await?;

    notify(&state, format!("{} posted successfully!", tweet)).await;

    Ok(Json(POSTED))
}

async fn delete_tweet(
    State(state): State<AppState>,
    Path((username, tweet)): Path<(String, String)>,
) -> Result<Json<&'static str>, ApiError> {
    state.tweet_service.delete_tweet(&username, &tweet).await?;
    Ok(Json(DELETED))
}

async fn get_all_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegisteredUser>>, ApiError> {
    Ok(Json(state.tweet_service.get_all_users().await?))
}

async fn get_tweets_by_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<UserTweet>>, ApiError> {
    Ok(Json(state.tweet_service.get_tweets_by_user(&username).await?))
}

async fn get_all_tweets(State(state): State<AppState>) -> Result<Json<Vec<UserTweet>>, ApiError> {
    Ok(Json(state.tweet_service.get_all_tweets().await?))
}

async fn get_all_comments(
    State(state): State<AppState>,
    Path((username, tweet)): Path<(String, String)>,
) -> Result<Json<Vec<UserComment>>, ApiError> {
    Ok(Json(state.tweet_service.get_comments(&username, &tweet).await?))
}

async fn get_user_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Option<User>>, ApiError> {
    Ok(Json(state.tweet_service.get_user_profile(&username).await?))
}

async fn update_password(
    State(state): State<AppState>,
    Path((email, old_password, new_password)): Path<(String, String, String)>,
) -> Result<Json<&'static str>, ApiError> {
    match state
        .tweet_service
        .update_password(&email, &old_password, &new_password)
        .await?
    {
        OperationOutcome::Success => Ok(Json(PASSWORD_UPDATED)),
        OperationOutcome::NotFound => Err(ApiError::unauthorized("invalid credentials")),
    }
}

async fn forgot_password(
    State(state): State<AppState>,
    Path((email, password)): Path<(String, String)>,
) -> Result<Json<&'static str>, ApiError> {
    match state.tweet_service.forgot_password(&email, &password).await? {
        OperationOutcome::Success => {
            notify(&state, "Password Updated Successfully".to_string()).await;
            Ok(Json(PASSWORD_CHANGED))
        }
        OperationOutcome::NotFound => Err(ApiError::not_found("user not found")),
    }
}

async fn post_comment(
    State(state): State<AppState>,
    Path((comment, username, name, tweet)): Path<(String, String, String, String)>,
) -> Result<Json<u64>, ApiError> {
    let rows = state
        .tweet_service
        .post_comment(PostCommentRequest {
            comment,
            username,
            name,
            tweet,
        })
        .await?;

    Ok(Json(rows))
}

async fn get_likes(
    State(state): State<AppState>,
    Path((username, tweet)): Path<(String, String)>,
) -> Result<Json<i64>, ApiError> {
    Ok(Json(state.tweet_service.likes(&username, &tweet).await?))
}
