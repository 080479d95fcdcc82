use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One entry in a ticket's conversation history.
///
/// Activities do not reference their ticket; the conversation view that
/// holds them owns that association.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ActivityType,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActivityType {
    /// Automated ticket-lifecycle note.
    System,
    /// Human reply.
    Message,
}

impl Model {
    pub fn system(id: impl Into<String>, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            kind: ActivityType::System,
            content: content.into(),
            author: None,
            created_at,
        }
    }

    pub fn message(
        id: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ActivityType::Message,
            content: content.into(),
            author: Some(author.into()),
            created_at,
        }
    }
}
