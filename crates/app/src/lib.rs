//! NoteMaker screen controllers.
//!
//! Exposes the configuration loader, the view-data records and the two
//! assemblers (notes overview, save/edit note) so the binary entrypoint and
//! integration tests share them.

pub mod config;
pub mod features;
pub mod view_data;
