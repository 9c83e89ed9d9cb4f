//! Domain primitives shared by every NoteMaker crate.
//!
//! Nothing in here touches storage or the runtime: ids, the error
//! taxonomy, the fixed color catalog and note-level rules.

pub mod colors;
pub mod error;
pub mod notes;
pub mod types;
