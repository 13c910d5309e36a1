use regex::Regex;
use std::sync::OnceLock;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts structured (entity, field, value) information from the message
/// text and constraint names Postgres reports, so API clients see which
/// column collided instead of a raw database error.
pub struct ConstraintParser;

/// Compiled regex patterns for constraint parsing, cached for reuse
struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" pattern in PostgreSQL messages
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            // Matches column names in quotes
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            // Matches table names in quotes
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation message.
    ///
    /// Understands the constraint names this schema produces, e.g.
    /// `users_pkey` and `users_email_key`, and falls back to the
    /// `Key (field)=(value)` detail line when the name is opaque.
    ///
    /// # Returns
    /// Optional tuple of (entity, field, value) if parsing succeeds
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                if let Some((_, value)) = Self::extract_key_value_from_message(message) {
                    return Some((entity, field, value));
                }
                return Some((entity, field, "duplicate_value".to_string()));
            }
        }

        // Fallback: take field and value from the DETAIL line.
        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a not null constraint violation message.
    ///
    /// # Returns
    /// Optional tuple of (entity, field) if parsing succeeds
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(field) = Self::extract_column_from_message(message) {
            let entity = Self::extract_table_from_message(message)
                .or_else(|| {
                    constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e))
                })
                .unwrap_or_else(|| "resource".to_string());
            return Some((entity, field));
        }

        None
    }

    /// Parses a foreign key constraint violation message.
    ///
    /// Handles names like `listings_username_fkey` and
    /// `messages_from_user_fkey`.
    ///
    /// # Returns
    /// Optional tuple of (entity, field, referenced_value) if parsing succeeds
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_foreign_key_constraint_name(constraint) {
                if let Some((_, value)) = Self::extract_key_value_from_message(message) {
                    return Some((entity, field, value));
                }
                return Some((entity, field, "invalid_reference".to_string()));
            }
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a `<table>_<field>_key` / `<table>_<field>_idx` constraint name.
    ///
    /// A bare `<table>_pkey` maps to the table's natural key column, which
    /// for this schema only happens on `users` (keyed by `username`).
    pub fn parse_constraint_name(constraint: &str) -> Option<(String, String)> {
        if let Some(table) = constraint.strip_suffix("_pkey") {
            let field = match table {
                "users" => "username",
                _ => "id",
            };
            return Some((table.to_string(), field.to_string()));
        }

        let stripped = constraint
            .strip_suffix("_key")
            .or_else(|| constraint.strip_suffix("_idx"))?;
        let (table, field) = stripped.split_once('_')?;
        if table.is_empty() || field.is_empty() {
            return None;
        }
        Some((table.to_string(), field.to_string()))
    }

    /// Parses a `<table>_<field>_fkey` constraint name.
    ///
    /// The field part may itself contain underscores (`from_user`), so only
    /// the first segment is treated as the table name.
    pub fn parse_foreign_key_constraint_name(constraint: &str) -> Option<(String, String)> {
        let stripped = constraint.strip_suffix("_fkey")?;
        let (table, field) = stripped.split_once('_')?;
        if table.is_empty() || field.is_empty() {
            return None;
        }
        Some((table.to_string(), field.to_string()))
    }

    /// Extracts the `Key (field)=(value)` pair from a DETAIL line.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        let captures = Self::patterns().key_value.captures(message)?;
        Some((captures[1].to_string(), captures[2].to_string()))
    }

    /// Extracts a quoted column name from the message.
    pub fn extract_column_from_message(message: &str) -> Option<String> {
        let captures = Self::patterns().column_name.captures(message)?;
        Some(captures[1].to_string())
    }

    /// Extracts a quoted table name from the message.
    pub fn extract_table_from_message(message: &str) -> Option<String> {
        let captures = Self::patterns().table_name.captures(message)?;
        Some(captures[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unique_key_constraint_name() {
        let result = ConstraintParser::parse_constraint_name("users_email_key");
        assert_eq!(result, Some(("users".to_string(), "email".to_string())));
    }

    #[test]
    fn parses_users_pkey_to_username() {
        let result = ConstraintParser::parse_constraint_name("users_pkey");
        assert_eq!(result, Some(("users".to_string(), "username".to_string())));
    }

    #[test]
    fn parses_fkey_with_underscored_field() {
        let result = ConstraintParser::parse_foreign_key_constraint_name("messages_from_user_fkey");
        assert_eq!(
            result,
            Some(("messages".to_string(), "from_user".to_string()))
        );

        let result = ConstraintParser::parse_foreign_key_constraint_name("images_listing_id_fkey");
        assert_eq!(
            result,
            Some(("images".to_string(), "listing_id".to_string()))
        );
    }

    #[test]
    fn rejects_non_fkey_names() {
        assert_eq!(
            ConstraintParser::parse_foreign_key_constraint_name("users_email_key"),
            None
        );
    }

    #[test]
    fn extracts_key_value_from_detail_line() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(belle@belle.com) already exists.";
        let result = ConstraintParser::extract_key_value_from_message(message);
        assert_eq!(
            result,
            Some(("email".to_string(), "belle@belle.com".to_string()))
        );
    }

    #[test]
    fn extracts_column_from_not_null_message() {
        let message = "null value in column \"email\" violates not-null constraint";
        let result = ConstraintParser::extract_column_from_message(message);
        assert_eq!(result, Some("email".to_string()));
    }

    #[test]
    fn parses_full_unique_violation() {
        let message = "duplicate key value violates unique constraint \"users_pkey\"\nDETAIL: Key (username)=(belle) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("users_pkey"));
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "username".to_string(),
                "belle".to_string()
            ))
        );
    }

    #[test]
    fn parses_full_foreign_key_violation() {
        let message = "insert or update on table \"listings\" violates foreign key constraint \"listings_username_fkey\"\nDETAIL: Key (username)=(ghost) is not present in table \"users\".";
        let result =
            ConstraintParser::parse_foreign_key_violation(message, Some("listings_username_fkey"));
        assert_eq!(
            result,
            Some((
                "listings".to_string(),
                "username".to_string(),
                "ghost".to_string()
            ))
        );
    }
}
