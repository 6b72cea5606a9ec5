//! In-memory storage implementation.
//!
//! This module provides the `MemoryStore` implementation of the `Store` trait.

use std::collections::BTreeMap;

use meridian_core::{InquiryId, UserId};
use parking_lot::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::types::{Inquiry, NewInquiry, NewUser, User};
use crate::Store;

/// One collection: its rows plus the next identifier to hand out.
///
/// Rows are keyed by ID, and IDs only grow, so map order is creation order.
#[derive(Debug)]
struct Table<K, V> {
    next_id: K,
    rows: BTreeMap<K, V>,
}

impl<K: Ord + Copy, V> Table<K, V> {
    fn new(first: K) -> Self {
        Self {
            next_id: first,
            rows: BTreeMap::new(),
        }
    }
}

/// Process-lifetime storage backed by two locked maps.
///
/// Each collection has its own lock, and allocating an ID and inserting the
/// row happen under a single write guard, so concurrent creators never share
/// an ID and readers never see a partially inserted record.
#[derive(Debug)]
pub struct MemoryStore<C = SystemClock> {
    users: RwLock<Table<UserId, User>>,
    inquiries: RwLock<Table<InquiryId, Inquiry>>,
    clock: C,
}

impl MemoryStore<SystemClock> {
    /// Create an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryStore<C> {
    /// Create an empty store that takes creation times from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            users: RwLock::new(Table::new(UserId::FIRST)),
            inquiries: RwLock::new(Table::new(InquiryId::FIRST)),
            clock,
        }
    }

    /// Number of stored users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.read().rows.len()
    }
}

impl<C: Clock> Store for MemoryStore<C> {
    // =========================================================================
    // User Operations
    // =========================================================================

    fn get_user(&self, id: UserId) -> Option<User> {
        self.users.read().rows.get(&id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .rows
            .values()
            .find(|user| user.account.username == username)
            .cloned()
    }

    fn create_user(&self, account: NewUser) -> User {
        let mut users = self.users.write();

        let id = users.next_id;
        users.next_id = id.next();

        let user = User { id, account };
        users.rows.insert(id, user.clone());

        tracing::debug!(user_id = %id, username = %user.account.username, "User created");
        user
    }

    // =========================================================================
    // Inquiry Operations
    // =========================================================================

    fn create_inquiry(&self, contact: NewInquiry) -> Inquiry {
        let mut inquiries = self.inquiries.write();

        let id = inquiries.next_id;
        inquiries.next_id = id.next();

        let inquiry = Inquiry {
            id,
            contact,
            created_at: self.clock.now(),
        };
        inquiries.rows.insert(id, inquiry.clone());

        tracing::debug!(inquiry_id = %id, created_at = %inquiry.created_at, "Inquiry created");
        inquiry
    }

    fn get_inquiries(&self) -> Vec<Inquiry> {
        let mut inquiries: Vec<Inquiry> = self.inquiries.read().rows.values().cloned().collect();

        inquiries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        inquiries
    }

    fn get_inquiry(&self, id: InquiryId) -> Option<Inquiry> {
        self.inquiries.read().rows.get(&id).cloned()
    }

    fn inquiry_count(&self) -> usize {
        self.inquiries.read().rows.len()
    }
}
