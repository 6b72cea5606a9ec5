//! Record types held by the store.
//!
//! Field names serialize in camelCase to match the site's contact form.

use chrono::{DateTime, Utc};
use meridian_core::{InquiryId, UserId};
use serde::{Deserialize, Serialize};

/// Payload for creating a user; everything except the ID.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Login name. Uniqueness is advisory only.
    pub username: String,
    /// Credential material, stored as given and never serialized outward.
    #[serde(skip_serializing)]
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Assigned by the store at creation.
    pub id: UserId,
    /// Caller-supplied fields.
    #[serde(flatten)]
    pub account: NewUser,
}

impl User {
    /// Shorthand for the account's username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.account.username
    }
}

/// Contact-form payload for creating an inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    /// Contact's first name.
    pub first_name: String,
    /// Contact's last name.
    pub last_name: String,
    /// Reply address.
    pub email: String,
    /// Phone number, if given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Company name, if given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Headcount bracket picked on the form (e.g. "11-50").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    /// Service the contact is interested in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_interest: Option<String>,
    /// Free-text message.
    pub message: String,
}

/// An inquiry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    /// Assigned by the store at creation.
    pub id: InquiryId,
    /// Caller-supplied contact fields.
    #[serde(flatten)]
    pub contact: NewInquiry,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
