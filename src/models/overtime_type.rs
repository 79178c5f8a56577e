use serde::{Deserialize, Serialize};

/// Why the overtime was worked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeType {
    PendingTasks,
    NewTasks,
    Tracking,
}

impl OvertimeType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            OvertimeType::PendingTasks => "pending_tasks",
            OvertimeType::NewTasks => "new_tasks",
            OvertimeType::Tracking => "tracking",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending_tasks" => Some(OvertimeType::PendingTasks),
            "new_tasks" => Some(OvertimeType::NewTasks),
            "tracking" => Some(OvertimeType::Tracking),
            _ => None,
        }
    }

    /// Lenient parse for CLI input ("new-tasks", "NEW_TASKS", ...).
    pub fn from_input(s: &str) -> Option<Self> {
        Self::from_db_str(&s.trim().to_lowercase().replace('-', "_"))
    }

    pub fn label(&self) -> &'static str {
        match self {
            OvertimeType::PendingTasks => "Pending tasks",
            OvertimeType::NewTasks => "New tasks",
            OvertimeType::Tracking => "Tracking",
        }
    }
}
