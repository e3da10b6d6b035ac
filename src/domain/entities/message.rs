//! Inbox messages and balance history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable;

/// Inbox message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Message {
    #[serde(deserialize_with = "nullable::or_default")]
    pub id: u64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub title: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub content: String,
    #[serde(rename = "type", deserialize_with = "nullable::or_default")]
    pub kind: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub created_at: DateTime<Utc>,
}

/// One page of inbox messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct MessagePage {
    #[serde(deserialize_with = "nullable::or_default")]
    pub messages: Vec<Message>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub total: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub page: u32,
    #[serde(deserialize_with = "nullable::or_default")]
    pub page_size: u32,
}

/// Number of unread inbox messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    /// Unread message count.
    pub unread_count: i64,
}

/// Balance change record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct BalanceLog {
    #[serde(deserialize_with = "nullable::or_default")]
    pub id: u64,
    #[serde(rename = "type", deserialize_with = "nullable::or_default")]
    pub kind: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub amount: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub balance_after: f64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub description: String,
    #[serde(deserialize_with = "nullable::or_default")]
    pub created_at: DateTime<Utc>,
}

/// One page of balance change records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct BalanceLogPage {
    #[serde(deserialize_with = "nullable::or_default")]
    pub logs: Vec<BalanceLog>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub total: i64,
    #[serde(deserialize_with = "nullable::or_default")]
    pub page: u32,
    #[serde(deserialize_with = "nullable::or_default")]
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_field_renamed() {
        let page: MessagePage = serde_json::from_str(
            r#"{
                "messages": [{
                    "id": 1,
                    "title": "Welcome",
                    "content": "hi",
                    "type": "system",
                    "is_read": false,
                    "read_at": null,
                    "created_at": "2025-06-01T08:00:00Z"
                }],
                "total": 1,
                "page": 1,
                "page_size": 10
            }"#,
        )
        .unwrap();

        assert_eq!(page.messages.len(), 1);
        assert_eq!(page.messages[0].kind, "system");
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_null_strings_decode_as_empty() {
        let page: MessagePage = serde_json::from_str(
            r#"{"messages":[{"id":2,"title":null,"content":null,"type":null}],"total":null}"#,
        )
        .unwrap();
        assert_eq!(page.messages[0].id, 2);
        assert!(page.messages[0].title.is_empty());
        assert!(page.messages[0].kind.is_empty());
        assert_eq!(page.total, 0);

        let logs: BalanceLogPage = serde_json::from_str(
            r#"{"logs":[{"id":3,"type":"recharge","amount":5.0,"description":null}]}"#,
        )
        .unwrap();
        assert_eq!(logs.logs[0].kind, "recharge");
        assert!(logs.logs[0].description.is_empty());

        let page: MessagePage = serde_json::from_str(r#"{"messages":null}"#).unwrap();
        assert!(page.messages.is_empty());
    }

    #[test]
    fn test_unread_count_requires_field() {
        assert!(serde_json::from_str::<UnreadCount>("{}").is_err());
    }

    #[test]
    fn test_balance_log_page_rejects_wrong_types() {
        let result = serde_json::from_str::<BalanceLogPage>(r#"{"logs":"not-a-list"}"#);
        assert!(result.is_err());
    }
}
