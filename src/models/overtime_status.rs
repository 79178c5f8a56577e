use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OvertimeStatus {
    Pending,
    Approved,
    Rejected,
}

impl OvertimeStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            OvertimeStatus::Pending => "pending",
            OvertimeStatus::Approved => "approved",
            OvertimeStatus::Rejected => "rejected",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OvertimeStatus::Pending),
            "approved" => Some(OvertimeStatus::Approved),
            "rejected" => Some(OvertimeStatus::Rejected),
            _ => None,
        }
    }
}
