use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,

    pub title: String,
    pub description: String,

    pub category: Category,
    pub priority: Priority,
    pub status: TicketStatus,

    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    /// Badge text shown next to a ticket.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Closed => "Closed",
        }
    }
}

/// Ticket category tag.
///
/// Known tags get their own variant; anything else is kept verbatim in
/// [`Category::Custom`] so existing option lists keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Technical,
    Billing,
    Feature,
    Hardware,
    Other,
    Custom(String),
}

impl Category {
    /// Values offered by the open-ticket form, in display order.
    pub const OPTIONS: [Category; 4] = [
        Category::Technical,
        Category::Billing,
        Category::Feature,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Technical => "technical",
            Category::Billing => "billing",
            Category::Feature => "feature",
            Category::Hardware => "hardware",
            Category::Other => "other",
            Category::Custom(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Technical => "Technical Issue",
            Category::Billing => "Billing",
            Category::Feature => "Feature Request",
            Category::Hardware => "Hardware",
            Category::Other => "Other",
            Category::Custom(raw) => raw,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "technical" => Category::Technical,
            "billing" => Category::Billing,
            "feature" => Category::Feature,
            "hardware" => Category::Hardware,
            "other" => Category::Other,
            raw => Category::Custom(raw.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Custom(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket priority tag. Unknown values are kept verbatim in [`Priority::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
    Custom(String),
}

impl Priority {
    /// Values offered by the open-ticket form, lowest first.
    pub const OPTIONS: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
            Priority::Custom(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
            Priority::Custom(raw) => raw,
        }
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        match value {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            "critical" => Priority::Critical,
            raw => Priority::Custom(raw.to_owned()),
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Priority::from(value.as_str())
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Custom(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for Priority {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Priority::from(s))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use strum::IntoEnumIterator;

    fn sample() -> Model {
        Model {
            id: "abc".into(),
            title: "Printer jammed".into(),
            description: "Paper stuck in tray 2".into(),
            category: Category::Hardware,
            priority: Priority::Custom("urgent".into()),
            status: TicketStatus::InProgress,
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn status_strings_are_snake_case() {
        let names: Vec<String> = TicketStatus::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["open", "in_progress", "closed"]);
        assert_eq!("IN_PROGRESS".parse::<TicketStatus>().unwrap(), TicketStatus::InProgress);
        assert!("pending".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn status_labels_match_badges() {
        assert_eq!(TicketStatus::Open.label(), "Open");
        assert_eq!(TicketStatus::InProgress.label(), "In Progress");
        assert_eq!(TicketStatus::Closed.label(), "Closed");
    }

    #[test]
    fn unknown_tags_are_kept_verbatim() {
        assert_eq!(Category::from("billing"), Category::Billing);
        assert_eq!(Category::from("Billing"), Category::Custom("Billing".into()));
        assert_eq!(Category::from("").to_string(), "");
        assert_eq!("critical".parse::<Priority>().unwrap(), Priority::Critical);
        assert_eq!(Priority::from("urgent").label(), "urgent");
    }

    #[test]
    fn form_options_carry_ui_labels() {
        let labels: Vec<&str> = Category::OPTIONS.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Technical Issue", "Billing", "Feature Request", "Other"]);

        let values: Vec<&str> = Priority::OPTIONS.iter().map(|p| p.as_str()).collect();
        assert_eq!(values, ["low", "medium", "high", "critical"]);
    }

    #[test]
    fn wire_form_is_camel_case_with_plain_tags() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "abc",
                "title": "Printer jammed",
                "description": "Paper stuck in tray 2",
                "category": "hardware",
                "priority": "urgent",
                "status": "in_progress",
                "createdAt": "2025-01-02T03:04:05.000Z",
            })
        );

        let back: Model = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample());
    }
}
