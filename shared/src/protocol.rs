//! 与后端交互的请求体 / 响应体定义
//!
//! 后端返回的字段并不稳定，所有响应类型都带 `#[serde(default)]`，
//! 缺失字段时退回默认值而不是解析失败。

use crate::{Role, User};
use serde::{Deserialize, Serialize};

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `/auth/login`、`/auth/register` 的成功响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthResponse {
    pub message: Option<String>,
    pub user: Option<User>,
}

/// `/auth/me` 的响应，未登录时 `user` 为 `null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MeResponse {
    pub authenticated: bool,
    pub user: Option<User>,
}

/// 只携带提示信息的响应（登出、删除等）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MessageResponse {
    pub message: Option<String>,
}

/// 服务端错误体
///
/// 字段全部可选：`message` 优先于 `error`，`requirements` 只在密码强度校验失败时出现。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub requirements: Vec<String>,
}

// =========================================================
// 帖子 (Posts)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

// =========================================================
// 消息 (Messages)
// =========================================================

/// 发送消息：`receiver_id` 与 `community_id` 二选一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
}

impl SendMessageRequest {
    pub fn to_user(receiver_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            receiver_id: Some(receiver_id.into()),
            community_id: None,
        }
    }

    pub fn to_community(community_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            receiver_id: None,
            community_id: Some(community_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_tolerates_missing_fields() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body, ErrorBody::default());

        let body: ErrorBody = serde_json::from_str(
            r#"{"message":"Weak password","requirements":["At least 12 characters","One number"]}"#,
        )
        .unwrap();
        assert_eq!(body.message.as_deref(), Some("Weak password"));
        assert_eq!(body.requirements.len(), 2);
    }

    #[test]
    fn send_message_omits_unused_target() {
        let json = serde_json::to_value(SendMessageRequest::to_user("3", "hi")).unwrap();
        assert_eq!(json, serde_json::json!({"content": "hi", "receiver_id": "3"}));
    }
}
