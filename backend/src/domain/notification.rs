//! One-shot user-facing notifications.
//!
//! The HTTP adapter stores these in the session after a write and drains them
//! when the next page renders. The wording for each outcome lives here so the
//! router and tests agree on it.

use serde::{Deserialize, Serialize};

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    /// The requested change was applied.
    Success,
    /// The request was understood but not applied.
    Warning,
    /// The request was refused.
    Danger,
}

impl NotificationLevel {
    /// Lowercase label, also usable as a CSS class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Message shown once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    level: NotificationLevel,
    message: String,
}

impl Notification {
    /// Build a notification with arbitrary text.
    #[must_use]
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Severity.
    #[must_use]
    pub const fn level(&self) -> NotificationLevel {
        self.level
    }

    /// Text shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Login rejected. Identical for unknown users and wrong passwords.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(NotificationLevel::Danger, "Invalid username or password.")
    }

    /// Account created; the visitor should now log in.
    #[must_use]
    pub fn registered() -> Self {
        Self::new(
            NotificationLevel::Success,
            "Registration successful. Please log in.",
        )
    }

    /// Account creation failed (duplicate username or malformed form).
    #[must_use]
    pub fn registration_failed() -> Self {
        Self::new(
            NotificationLevel::Danger,
            "Registration failed. Try a different username.",
        )
    }

    /// Add form was incomplete or malformed.
    #[must_use]
    pub fn missing_fields() -> Self {
        Self::new(NotificationLevel::Warning, "Please fill in every field.")
    }

    /// Update form carried an unusable value.
    #[must_use]
    pub fn invalid_update(reason: &str) -> Self {
        Self::new(
            NotificationLevel::Warning,
            format!("Employee not updated: {reason}."),
        )
    }

    /// Roster row inserted.
    #[must_use]
    pub fn employee_added() -> Self {
        Self::new(NotificationLevel::Success, "Employee added.")
    }

    /// Roster row overwritten.
    #[must_use]
    pub fn employee_updated() -> Self {
        Self::new(NotificationLevel::Success, "Employee details updated.")
    }

    /// Roster row removed.
    #[must_use]
    pub fn employee_deleted() -> Self {
        Self::new(NotificationLevel::Success, "Employee deleted.")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn serialises_level_in_snake_case() {
        let value = serde_json::to_value(Notification::missing_fields()).expect("serialises");
        assert_eq!(value["level"], "warning");
    }

    #[test]
    fn update_rejection_names_the_reason() {
        let notification = Notification::invalid_update("age must be a whole number");
        assert_eq!(notification.level(), NotificationLevel::Warning);
        assert!(notification.message().contains("age must be a whole number"));
    }
}
