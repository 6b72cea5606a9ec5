//! Record storage for the Meridian HR site.
//!
//! This crate holds users and contact-form inquiries for the lifetime of the
//! process. Nothing is written to disk; a restart starts from empty
//! collections.
//!
//! # Architecture
//!
//! Each collection keeps its own identifier counter:
//!
//! - `users`: user records, keyed by `UserId`
//! - `inquiries`: contact-form submissions, keyed by `InquiryId`
//!
//! Identifiers start at 1 and are never reused. Records are never updated or
//! deleted once created.
//!
//! # Example
//!
//! ```
//! use meridian_store::{MemoryStore, NewInquiry, Store};
//!
//! let store = MemoryStore::new();
//!
//! let inquiry = store.create_inquiry(NewInquiry {
//!     first_name: "Ada".into(),
//!     last_name: "Lovelace".into(),
//!     email: "ada@example.com".into(),
//!     phone: None,
//!     company: None,
//!     company_size: None,
//!     service_interest: None,
//!     message: "We need help with onboarding.".into(),
//! });
//!
//! assert_eq!(inquiry.id.get(), 1);
//! assert_eq!(store.get_inquiries().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;
pub mod memory;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use memory::MemoryStore;
pub use types::{Inquiry, NewInquiry, NewUser, User};

use meridian_core::{InquiryId, UserId};

/// The storage trait defining all record operations.
///
/// No operation fails: a missing record is reported as `None`. Returned
/// records are snapshots; later writes never change a value already handed
/// out.
pub trait Store: Send + Sync {
    // =========================================================================
    // User Operations
    // =========================================================================

    /// Get a user by ID.
    fn get_user(&self, id: UserId) -> Option<User>;

    /// Find the first user, in creation order, whose username matches exactly.
    ///
    /// Usernames are not enforced unique; duplicates resolve to the oldest.
    fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Store a new user and return it with its assigned ID.
    fn create_user(&self, user: NewUser) -> User;

    // =========================================================================
    // Inquiry Operations
    // =========================================================================

    /// Store a new inquiry, stamping its ID and creation time.
    fn create_inquiry(&self, inquiry: NewInquiry) -> Inquiry;

    /// List every inquiry, newest first.
    ///
    /// Inquiries with identical `created_at` are ordered by ID descending.
    fn get_inquiries(&self) -> Vec<Inquiry>;

    /// Get an inquiry by ID.
    fn get_inquiry(&self, id: InquiryId) -> Option<Inquiry>;

    /// Number of stored inquiries.
    fn inquiry_count(&self) -> usize;
}
