//! JWT 签发模块
//!
//! 提供登录令牌的生成与验证。

use config::JwtConfig;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// JWT Claims 结构
///
/// nameid 与 role 与 sub 保持一致（沿用既有令牌格式，没有真实的角色模型）。
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// 每次签发唯一的令牌ID
    pub jti: String,
    pub nameid: String,
    pub role: String,
    pub iss: String,
    /// 过期时间 (Unix timestamp)
    pub exp: i64,
}

/// JWT Token 服务
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 生成 JWT token（HS256）
    pub fn generate_token(&self, subject: &str) -> Result<String, ApiError> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::days(self.config.expire_days);

        let claims = Claims {
            sub: subject.to_owned(),
            jti: Uuid::new_v4().to_string(),
            nameid: subject.to_owned(),
            role: subject.to_owned(),
            iss: self.config.issuer.clone(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| ApiError::internal_server_error(format!("Token generation failed: {}", err)))
    }

    /// 验证并解析 JWT token
    pub fn verify_token(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|err| ApiError::unauthorized(format!("Invalid token: {}", err)))
    }
}

/// 登录状态，序列化为既有接口的字面量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginStatus {
    Success,
    UnSuccess,
}

/// 登录响应结构
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub token: Option<String>,
    pub status: LoginStatus,
}

impl Token {
    pub fn success(user_id: i64, username: String, token: String) -> Self {
        Self {
            user_id: Some(user_id),
            username: Some(username),
            token: Some(token),
            status: LoginStatus::Success,
        }
    }

    pub fn unsuccess() -> Self {
        Self {
            user_id: None,
            username: None,
            token: None,
            status: LoginStatus::UnSuccess,
        }
    }
}
