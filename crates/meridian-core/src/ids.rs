//! Core identifier types.
//!
//! Records are keyed by positive integers handed out by the store, one
//! counter per collection. Both ID types share a representation but are
//! deliberately distinct types so a user ID can never be used to look up
//! an inquiry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdError;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u64", into = "u64")]
        pub struct $name(u64);

        impl $name {
            /// The first identifier a collection hands out.
            pub const FIRST: Self = Self(1);

            /// Create an identifier from a raw value.
            ///
            /// Returns `None` for zero, which is never assigned.
            #[must_use]
            pub const fn new(value: u64) -> Option<Self> {
                if value == 0 {
                    None
                } else {
                    Some(Self(value))
                }
            }

            /// Return the raw integer value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }

            /// Return the identifier that follows this one.
            #[must_use]
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_positive(s).map(Self)
            }
        }

        impl TryFrom<u64> for $name {
            type Error = IdError;

            fn try_from(value: u64) -> Result<Self, Self::Error> {
                Self::new(value).ok_or(IdError::OutOfRange(0))
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

record_id! {
    /// Identifier of a user record.
    UserId
}

record_id! {
    /// Identifier of an inquiry submitted through the contact form.
    InquiryId
}

/// Parse a decimal string into a value usable as an identifier.
///
/// Any integer is accepted syntactically; values below 1 or above
/// `u64::MAX` are reported as out of range rather than malformed.
fn parse_positive(s: &str) -> Result<u64, IdError> {
    let value: i128 = s
        .trim()
        .parse()
        .map_err(|_| IdError::NotNumeric(s.to_string()))?;

    match u64::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(IdError::OutOfRange(value)),
    }
}
