//! 序列化辅助函数
//!
//! 服务端使用整数主键，本地 fixture 使用字符串 id，这里统一转换为 `String`。

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Str(String),
    Int(i64),
    Uint(u64),
}

/// 接受 JSON 字符串或数字，统一反序列化为 `String`
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Str(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Uint(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
    }

    #[test]
    fn accepts_both_shapes() {
        let a: Holder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"id": "p1"}"#).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(b.id, "p1");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_str::<Holder>(r#"{"id": [1]}"#).is_err());
    }
}
