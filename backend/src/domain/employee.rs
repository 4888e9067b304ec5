//! Employee roster entities.
//!
//! `EmployeeFields` carries the three mutable columns. Two constructors exist
//! because insertion and replacement validate differently: new rows need every
//! field filled in, while edits only insist on a usable age.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length for `name` and `department`, matching the column widths.
pub const EMPLOYEE_TEXT_MAX: usize = 100;

/// Form field an employee validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    /// The `name` input.
    Name,
    /// The `age` input.
    Age,
    /// The `department` input.
    Department,
}

impl EmployeeField {
    /// Form field name as submitted by clients.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Department => "department",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for employee form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeValidationError {
    /// A required field was blank.
    #[error("{field} must not be empty")]
    Missing {
        /// Offending field.
        field: EmployeeField,
    },
    /// A text field exceeded the column width.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Offending field.
        field: EmployeeField,
        /// Character limit.
        max: usize,
    },
    /// Age did not parse as an integer.
    #[error("age must be a whole number")]
    AgeNotInteger,
    /// Age parsed but was below zero.
    #[error("age must not be negative")]
    AgeNegative,
}

impl EmployeeValidationError {
    /// Field the failure refers to.
    #[must_use]
    pub const fn field(&self) -> EmployeeField {
        match self {
            Self::Missing { field } | Self::TooLong { field, .. } => *field,
            Self::AgeNotInteger | Self::AgeNegative => EmployeeField::Age,
        }
    }
}

/// Raw employee form values exactly as submitted.
///
/// Validation happens in the roster service, which picks the insert or
/// replace rules depending on the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeInput {
    /// Submitted name.
    pub name: String,
    /// Submitted age, unparsed.
    pub age: String,
    /// Submitted department.
    pub department: String,
}

impl EmployeeInput {
    /// Bundle raw form values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            department: department.into(),
        }
    }
}

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// Wrap a raw identifier, typically parsed from a `/delete/{id}` path.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name, age, and department of an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    name: String,
    age: i32,
    department: String,
}

impl EmployeeFields {
    /// Validate fields for a new roster entry.
    ///
    /// Every field must be present and non-blank; `age` must parse as a
    /// non-negative integer.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::EmployeeFields;
    ///
    /// let fields = EmployeeFields::for_insert("Jane", "30", "Eng").expect("valid");
    /// assert_eq!(fields.age(), 30);
    /// assert!(EmployeeFields::for_insert("", "30", "Eng").is_err());
    /// ```
    pub fn for_insert(
        name: &str,
        age: &str,
        department: &str,
    ) -> Result<Self, EmployeeValidationError> {
        let checked_name = required_text(name, EmployeeField::Name)?;
        if age.trim().is_empty() {
            return Err(EmployeeValidationError::Missing {
                field: EmployeeField::Age,
            });
        }
        let checked_department = required_text(department, EmployeeField::Department)?;
        Ok(Self {
            name: checked_name,
            age: parse_age(age)?,
            department: checked_department,
        })
    }

    /// Validate fields for a full replacement of an existing entry.
    ///
    /// Only `age` is checked beyond the column widths, so blank names and
    /// departments are accepted.
    pub fn for_replace(
        name: &str,
        age: &str,
        department: &str,
    ) -> Result<Self, EmployeeValidationError> {
        let checked_name = bounded_text(name, EmployeeField::Name)?;
        let checked_department = bounded_text(department, EmployeeField::Department)?;
        Ok(Self {
            name: checked_name,
            age: parse_age(age)?,
            department: checked_department,
        })
    }

    /// Rebuild fields from a stored row without re-validating.
    pub(crate) const fn from_stored(name: String, age: i32, department: String) -> Self {
        Self {
            name,
            age,
            department,
        }
    }

    /// Employee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in whole years.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Department label.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }
}

fn bounded_text(raw: &str, field: EmployeeField) -> Result<String, EmployeeValidationError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > EMPLOYEE_TEXT_MAX {
        return Err(EmployeeValidationError::TooLong {
            field,
            max: EMPLOYEE_TEXT_MAX,
        });
    }
    Ok(trimmed.to_owned())
}

fn required_text(raw: &str, field: EmployeeField) -> Result<String, EmployeeValidationError> {
    let text = bounded_text(raw, field)?;
    if text.is_empty() {
        return Err(EmployeeValidationError::Missing { field });
    }
    Ok(text)
}

fn parse_age(raw: &str) -> Result<i32, EmployeeValidationError> {
    let age: i32 = raw
        .trim()
        .parse()
        .map_err(|_| EmployeeValidationError::AgeNotInteger)?;
    if age < 0 {
        return Err(EmployeeValidationError::AgeNegative);
    }
    Ok(age)
}

/// Employee roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    fields: EmployeeFields,
}

impl Employee {
    /// Pair an identifier with its field values.
    #[must_use]
    pub const fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self { id, fields }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Employee name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.fields.name()
    }

    /// Age in whole years.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.fields.age()
    }

    /// Department label.
    #[must_use]
    pub fn department(&self) -> &str {
        self.fields.department()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "20", "Eng", EmployeeValidationError::Missing { field: EmployeeField::Name })]
    #[case("Jane", " ", "Eng", EmployeeValidationError::Missing { field: EmployeeField::Age })]
    #[case("Jane", "20", "", EmployeeValidationError::Missing { field: EmployeeField::Department })]
    #[case("Jane", "twenty", "Eng", EmployeeValidationError::AgeNotInteger)]
    #[case("Jane", "20.5", "Eng", EmployeeValidationError::AgeNotInteger)]
    #[case("Jane", "-1", "Eng", EmployeeValidationError::AgeNegative)]
    fn insert_rejects_incomplete_forms(
        #[case] name: &str,
        #[case] age: &str,
        #[case] department: &str,
        #[case] expected: EmployeeValidationError,
    ) {
        let err = EmployeeFields::for_insert(name, age, department).expect_err("must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn insert_trims_and_parses() {
        let fields = EmployeeFields::for_insert("  Jane ", " 30 ", " Eng").expect("valid");
        assert_eq!(fields.name(), "Jane");
        assert_eq!(fields.age(), 30);
        assert_eq!(fields.department(), "Eng");
    }

    #[rstest]
    fn replace_accepts_blank_text_but_not_bad_age() {
        let fields = EmployeeFields::for_replace("", "0", "").expect("blank text allowed");
        assert_eq!(fields.name(), "");
        assert_eq!(fields.age(), 0);

        let err = EmployeeFields::for_replace("Jane", "", "Eng").expect_err("age required");
        assert_eq!(err, EmployeeValidationError::AgeNotInteger);
    }

    #[rstest]
    #[case(EmployeeField::Name)]
    #[case(EmployeeField::Department)]
    fn text_fields_respect_column_width(#[case] field: EmployeeField) {
        let long = "x".repeat(EMPLOYEE_TEXT_MAX + 1);
        let (name, department) = match field {
            EmployeeField::Name => (long.as_str(), "Eng"),
            _ => ("Jane", long.as_str()),
        };
        let err = EmployeeFields::for_replace(name, "30", department).expect_err("too long");
        assert_eq!(err.field(), field);
    }
}
