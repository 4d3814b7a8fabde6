//! Database error classification.

/// Returns true if `e` is a unique violation on `links.short_code`.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some("links_short_code_key") || db_err.message().contains("short_code")
}
