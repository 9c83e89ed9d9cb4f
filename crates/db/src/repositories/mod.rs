//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&DbPool` (or any SQLite executor) as the first argument.

pub mod color_repo;
pub mod note_repo;

pub use color_repo::ColorRepo;
pub use note_repo::NoteRepo;
