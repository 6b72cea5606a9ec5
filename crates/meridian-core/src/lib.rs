//! Core types and utilities for the Meridian HR site.
//!
//! This crate provides the foundational types shared by the store and the gateway:
//!
//! - **Identifiers**: Strongly-typed integer IDs for users and inquiries
//! - **Error types**: Errors raised while parsing identifiers
//!
//! # Example
//!
//! ```
//! use meridian_core::{InquiryId, UserId};
//!
//! let user_id = UserId::new(1).unwrap();
//! assert_eq!(user_id.get(), 1);
//!
//! let inquiry_id: InquiryId = "42".parse().unwrap();
//! assert_eq!(inquiry_id.to_string(), "42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;

pub use error::IdError;
pub use ids::{InquiryId, UserId};
