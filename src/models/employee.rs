use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub created_at: String,
}

/// An authenticated principal. `employee_id` is the link stored in the
/// account metadata; it may be missing for accounts not yet onboarded.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub token: String,
    pub email: String,
    pub employee_id: Option<String>,
}
