//! 用户实体定义
//!
//! 包含注册用户的数据库行模型与列表读取模型。

use serde::{Deserialize, Serialize};

/// 用户实体
///
/// 密码哈希不参与序列化，永远不会出现在任何响应中。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 用户唯一ID
    pub id: i64,
    /// 用户名（唯一）
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 头像文件名（可选）
    pub image_name: Option<String>,
}

/// 待创建的用户记录
///
/// 由应用层在密码哈希完成后构造，交给持久化网关写入。
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub password_hash: String,
    pub image_name: Option<String>,
}

/// 用户列表读取模型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub image_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_omits_password_hash() {
        let user = User {
            id: 1,
            username: "bijin".to_string(),
            first_name: "Bijin".to_string(),
            last_name: "Kurien".to_string(),
            email: "bijin@example.com".to_string(),
            contact_number: "8871147488".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            image_name: Some("image.jpg".to_string()),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "bijin");
        assert_eq!(json["firstName"], "Bijin");
        assert_eq!(json["contactNumber"], "8871147488");
    }

    #[test]
    fn registered_user_uses_camel_case_fields() {
        let summary = RegisteredUser {
            username: "bijin".to_string(),
            first_name: "Bijin".to_string(),
            last_name: "Kurien".to_string(),
            image_name: None,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["firstName"], "Bijin");
        assert_eq!(json["lastName"], "Kurien");
        assert!(json["imageName"].is_null());
    }
}
