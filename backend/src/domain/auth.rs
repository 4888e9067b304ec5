//! Authentication primitives such as login credentials.
//!
//! Inbound payload parsing stays outside the domain; handlers hand raw form
//! strings to these constructors before talking to a port.

use zeroize::Zeroizing;

use super::user::{Username, UserValidationError};

/// Domain error returned when credential form values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Username was missing, blank, or too long.
    #[error(transparent)]
    Username(#[from] UserValidationError),
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated username/password pair used by login and registration.
///
/// ## Invariants
/// - `username` satisfies [`Username`] rules (trimmed, 1–150 chars).
/// - `password` is non-empty and keeps caller-provided whitespace so
///   credential comparisons are never surprising.
/// - The plaintext password is zeroed on drop and never printed by `Debug`.
///
/// # Examples
/// ```
/// use roster::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("alice", "correct").expect("valid shape");
/// assert_eq!(creds.username().as_ref(), "alice");
/// assert_eq!(creds.password(), "correct");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let name = Username::new(username)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self {
            username: name,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Plaintext password provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialsValidationError::Username(UserValidationError::EmptyUsername))]
    #[case("   ", "pw", CredentialsValidationError::Username(UserValidationError::EmptyUsername))]
    #[case("user", "", CredentialsValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = Credentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  alice  ", "secret")]
    #[case("bob", "  spaced password  ")]
    fn valid_credentials_trim_username_only(#[case] username: &str, #[case] password: &str) {
        let creds = Credentials::try_from_parts(username, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.username().as_ref(), username.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn debug_output_hides_password() {
        let creds = Credentials::try_from_parts("alice", "hunter2").expect("valid shape");
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
