//! Identity resolution: bearer token → account → employee id.

use crate::db::employees::find_account_by_token;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Option<String> {
    let value = header?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Resolve the employee behind a request.
///
/// - no token / unknown token → `Unauthorized`
/// - account without a linked employee → `MissingEmployeeId`
pub fn resolve_employee(conn: &Connection, token: Option<&str>) -> AppResult<String> {
    let token = token.ok_or(AppError::Unauthorized)?;
    let account = find_account_by_token(conn, token)?.ok_or(AppError::Unauthorized)?;
    account.employee_id.ok_or(AppError::MissingEmployeeId)
}
