//! Email address type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shape check applied to checkout emails: something, `@`, something, `.`, something.
///
/// Unanchored: the shape may appear anywhere in the value.
static EMAIL_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid regex"));

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input is empty or whitespace only.
    #[error("email cannot be empty")]
    Empty,
    /// The input does not have the `local@domain.tld` shape.
    #[error("email must look like name@domain.tld")]
    Invalid,
}

/// An email address as entered on the checkout form.
///
/// ## Constraints
///
/// - Must not be blank after trimming
/// - Must contain a run of non-whitespace, `@`, non-whitespace, `.`,
///   non-whitespace somewhere in the value
///
/// The entered value is kept verbatim so the delivery backend receives
/// exactly what the customer typed.
///
/// ## Examples
///
/// ```
/// use dreamfit_core::Email;
///
/// assert!(Email::parse("user@example.com").is_ok());
/// assert!(Email::parse("a@b.c").is_ok());
///
/// assert!(Email::parse("   ").is_err());          // blank
/// assert!(Email::parse("user@example").is_err()); // no dot after @
/// assert!(Email::parse("user.example.com").is_err()); // missing @
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Empty`] for blank input and
    /// [`EmailError::Invalid`] when the value lacks the `x@y.z` shape.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.trim().is_empty() {
            return Err(EmailError::Empty);
        }

        if !EMAIL_SHAPE_RE.is_match(s) {
            return Err(EmailError::Invalid);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
