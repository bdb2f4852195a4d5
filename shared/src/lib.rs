use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;
pub mod serde_helper;

pub use date::Timestamp;
pub use protocol::*;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 后端地址的默认值（与开发环境中的 Flask 服务一致）
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
/// 登录成功后保存当前用户的持久化键
pub const SESSION_USER_KEY: &str = "agriconnect_user";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户角色
///
/// 服务端同时存在小写的旧字段（`farmer`）和展示用的大写名称（`Farmer`），
/// 两者都需要能被解析。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    #[serde(alias = "farmer")]
    Farmer,
    #[serde(alias = "expert")]
    Expert,
    #[serde(alias = "admin")]
    Admin,
    #[serde(alias = "user")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "Farmer",
            Role::Expert => "Expert",
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    /// 用户名前缀展示形式，如 `@farmer`
    pub fn handle(&self) -> String {
        format!("@{}", self.as_str().to_lowercase())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "serde_helper::string_or_number")]
    pub id: String,
    #[serde(alias = "username")]
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    pub bio: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "profile_image_url")]
    pub avatar: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub posts: u32,
}

/// 帖子作者的精简信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Author {
    #[serde(alias = "username")]
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "serde_helper::string_or_number")]
    pub id: String,
    pub author: Author,
    pub title: Option<String>,
    #[serde(alias = "content")]
    pub description: String,
    #[serde(alias = "image_url")]
    pub image: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub time_ago: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "serde_helper::string_or_number")]
    pub id: String,
    pub author: String,
    pub avatar: Option<String>,
    #[serde(alias = "content")]
    pub text: String,
    pub time_ago: String,
}

/// 专家目录条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Expert {
    #[serde(deserialize_with = "serde_helper::string_or_number")]
    pub id: String,
    #[serde(alias = "username")]
    pub name: String,
    pub specialty: String,
    pub followers: String,
    #[serde(alias = "profile_image_url")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Community {
    #[serde(deserialize_with = "serde_helper::string_or_number")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(alias = "image_url")]
    pub image: Option<String>,
    pub members: u32,
}

/// 会话列表中的联系人
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub avatar: Option<String>,
}

/// 消息列表页的单条会话摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Conversation {
    #[serde(deserialize_with = "serde_helper::string_or_number")]
    pub id: String,
    pub sender: Contact,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
}

/// 聊天气泡
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub message: String,
    /// 展示用的时间标签，如 `10:05`
    pub time: String,
    pub sent_at: Option<Timestamp>,
    pub is_sent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_accepts_legacy_lowercase() {
        let role: Role = serde_json::from_str("\"expert\"").unwrap();
        assert_eq!(role, Role::Expert);
        assert_eq!(role.handle(), "@expert");
    }

    #[test]
    fn post_accepts_server_field_names() {
        let post: Post = serde_json::from_str(
            r#"{"id": 7, "content": "Soil pH matters", "title": null, "author": {"username": "emily"}}"#,
        )
        .unwrap();
        assert_eq!(post.id, "7");
        assert_eq!(post.description, "Soil pH matters");
        assert_eq!(post.author.name, "emily");
        assert_eq!(post.likes, 0);
    }
}
