//! Ledger description derived from the session's project fields and memo.

/// Trimmed text, or None when blank.
pub fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// A free-text project name without a linked project id leads the
/// description ("Name - memo" or just "Name"); otherwise the memo alone.
pub fn derive_description(
    project_id: Option<i64>,
    project_name: Option<&str>,
    memo: Option<&str>,
) -> Option<String> {
    let memo = non_blank(memo);

    match (project_id, non_blank(project_name)) {
        (None, Some(name)) => Some(match memo {
            Some(m) => format!("{name} - {m}"),
            None => name,
        }),
        _ => memo,
    }
}
