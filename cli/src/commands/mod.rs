//! Command handlers, one module per resource.

pub mod attendance;
pub mod auth;
pub mod orders;
pub mod products;
pub mod reports;
pub mod stock;
pub mod users;

use tienda_cli::{CliError, Result};
use tienda_link::models::{User, UserRole};

/// Parse a role argument.
pub(crate) fn parse_role(value: &str) -> Result<UserRole> {
    match value.trim().to_lowercase().as_str() {
        "admin" => Ok(UserRole::Admin),
        "manager" => Ok(UserRole::Manager),
        "employee" => Ok(UserRole::Employee),
        other => Err(CliError::Parse(format!(
            "unknown role '{}', expected admin, manager or employee",
            other
        ))),
    }
}

/// Detail pairs for a user record.
pub(crate) fn user_pairs(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("id", user.id.clone()),
        ("email", user.email.clone()),
        ("name", user.name.clone()),
        ("role", user.role.to_string()),
        ("active", user.is_active.to_string()),
        ("created", user.created_at.clone()),
        ("updated", user.updated_at.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("admin").unwrap(), UserRole::Admin);
        assert_eq!(parse_role("Manager").unwrap(), UserRole::Manager);
        assert_eq!(parse_role(" employee ").unwrap(), UserRole::Employee);
        assert!(parse_role("wizard").is_err());
    }
}
