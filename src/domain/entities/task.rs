use serde::Serialize;
use std::fmt;

/// A recurring chore. Created by the caller, read-only inside the scheduler;
/// the id is assigned by the persistence layer on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub frequency: Frequency,
    pub priority: Priority,
}

impl Task {
    pub fn new(id: i64, name: String, frequency: Frequency, priority: Priority) -> Self {
        Self {
            id,
            name,
            frequency,
            priority,
        }
    }
}

/// How often a task recurs. `Other` carries unrecognized text read back from
/// storage; it yields no candidate dates and the task is reported unplaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    #[serde(untagged)]
    Other(String),
}

impl Frequency {
    pub fn parse(s: &str) -> Self {
        match s {
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "bi-weekly" => Frequency::BiWeekly,
            "monthly" => Frequency::Monthly,
            other => Frequency::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
            Frequency::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative importance, used only to order placement. Unknown text falls back
/// to `Mid`, matching the storage column default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Mid,
    Low,
}

impl Priority {
    pub fn parse(s: &str) -> Self {
        match s {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Mid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Mid => "mid",
            Priority::Low => "low",
        }
    }

    /// Placement rank: lower sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Mid => 2,
            Priority::Low => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
