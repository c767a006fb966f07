// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the QOTD duty scheduler.
//!
//! This crate stores the member registry, the assignment ledger, and the
//! audit trail in `SQLite` through Diesel.
//!
//! ## Stores
//!
//! - [`MemberStore`]: list, add, and remove members
//! - [`AssignmentStore`]: load and save the full ledger
//!
//! Engine transitions are written with [`Persistence::persist_transition`],
//! which applies the row-level changes and the audit event in one
//! transaction and rejects writes computed from a stale ledger.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives every caller its own shared-cache
//! in-memory database, so tests are isolated without touching the disk.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use qotd::{State, TransitionResult};
use qotd_audit::AuditEvent;
use qotd_domain::{Ledger, Member, MemberId, MemberRegistry};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Storage for the member registry.
pub trait MemberStore {
    /// Lists every member in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_members(&mut self) -> Result<Vec<Member>, PersistenceError>;

    /// Adds a member at the end of the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is taken or the write fails.
    fn add_member(&mut self, member: &Member) -> Result<(), PersistenceError>;

    /// Removes a member.
    ///
    /// # Errors
    ///
    /// Returns an error if the member does not exist or the write fails.
    fn remove_member(&mut self, member_id: &MemberId) -> Result<(), PersistenceError>;
}

/// Storage for the assignment ledger.
pub trait AssignmentStore {
    /// Loads the full ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds two assignments
    /// on one date.
    fn load(&mut self) -> Result<Ledger, PersistenceError>;

    /// Replaces the stored ledger with `ledger`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the stored ledger is unchanged then.
    fn save(&mut self, ledger: &Ledger) -> Result<(), PersistenceError>;
}

/// `SQLite` persistence adapter for members, assignments, and audit events.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_qotd_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;

        backend::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Loads the registry and ledger a transition is evaluated against.
    ///
    /// # Errors
    ///
    /// Returns an error if either store cannot be read or holds values that
    /// break a registry or ledger invariant.
    pub fn load_state(&mut self) -> Result<State, PersistenceError> {
        let registry: MemberRegistry = MemberRegistry::from_members(self.list_members()?)
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;
        let ledger: Ledger = self.load()?;
        Ok(State::new(registry, ledger))
    }

    /// Persists a transition result and its audit event atomically.
    ///
    /// # Returns
    ///
    /// The event ID assigned to the persisted audit event.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DateAlreadyAssigned` or
    /// `PersistenceError::StaleAssignment` if the store changed since the
    /// transition's state was loaded.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<i64, PersistenceError> {
        mutations::persist_transition(&mut self.conn, result)
    }

    /// Persists a standalone audit event.
    ///
    /// Used for registry changes, which do not go through the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn persist_audit_event(&mut self, event: &AuditEvent) -> Result<i64, PersistenceError> {
        mutations::persist_audit_event(&mut self.conn, event)
    }

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not found or cannot be deserialized.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        queries::get_audit_event(&mut self.conn, event_id)
    }

    /// Retrieves every audit event in the order it was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or an event cannot be deserialized.
    pub fn audit_timeline(&mut self) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::audit_timeline(&mut self.conn)
    }
}

impl MemberStore for Persistence {
    fn list_members(&mut self) -> Result<Vec<Member>, PersistenceError> {
        queries::list_members(&mut self.conn)
    }

    fn add_member(&mut self, member: &Member) -> Result<(), PersistenceError> {
        mutations::insert_member(&mut self.conn, member)
    }

    fn remove_member(&mut self, member_id: &MemberId) -> Result<(), PersistenceError> {
        mutations::delete_member(&mut self.conn, member_id)
    }
}

impl AssignmentStore for Persistence {
    fn load(&mut self) -> Result<Ledger, PersistenceError> {
        let assignments = queries::load_assignments(&mut self.conn)?;
        Ledger::from_assignments(assignments)
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), PersistenceError> {
        mutations::replace_all_assignments(&mut self.conn, ledger)
    }
}
