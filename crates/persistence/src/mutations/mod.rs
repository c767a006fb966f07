// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for the persistence layer.
//!
//! ## Module Organization
//!
//! - `members`: Member inserts and deletes
//! - `assignments`: Row-level assignment writes
//! - `audit`: Audit event persistence
//! - `transition`: Applying a `TransitionResult` atomically

pub mod assignments;
pub mod audit;
pub mod members;
pub mod transition;

pub use assignments::replace_all_assignments;
pub use audit::persist_audit_event;
pub use members::{delete_member, insert_member};
pub use transition::persist_transition;
