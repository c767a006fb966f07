// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the persistence layer.
//!
//! This module contains all read-only queries.
//!
//! ## Module Organization
//!
//! - `members`: Member registry listing
//! - `assignments`: Ledger loading
//! - `audit`: Audit event and timeline queries

pub mod assignments;
pub mod audit;
pub mod members;

pub use assignments::load_assignments;
pub use audit::{audit_timeline, get_audit_event};
pub use members::list_members;
