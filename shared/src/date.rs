//! 时间类型模块
//!
//! `Timestamp` 是可序列化的毫秒时间戳，聊天消息用它记录客户端发送时间，
//! 并按需格式化为 `HH:MM` 形式的展示标签。

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// Timestamp - 可传输的时间戳类型
// =========================================================

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 当前时间
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    fn to_utc(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// 按 UTC 输出 `HH:MM`
    pub fn clock_label_utc(&self) -> String {
        self.to_utc()
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    /// 按本地时区输出 `HH:MM`
    pub fn clock_label(&self) -> String {
        self.to_utc()
            .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_label_formats_hours_and_minutes() {
        // 2024-01-01T10:05:00Z
        let ts = Timestamp::new(1_704_103_500_000);
        assert_eq!(ts.clock_label_utc(), "10:05");
    }

    #[test]
    fn serializes_as_plain_number() {
        let ts = Timestamp::new(1234);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1234");
    }
}
