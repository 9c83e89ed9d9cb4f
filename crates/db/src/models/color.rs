//! Note color model.

use notemaker_core::colors::{DEFAULT_COLORS, DEFAULT_COLOR_HEX, DEFAULT_COLOR_ID};
use notemaker_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `colors` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Color {
    pub id: DbId,
    pub hex: Option<String>,
}

impl Color {
    pub fn new(id: DbId, hex: impl Into<String>) -> Self {
        Self {
            id,
            hex: Some(hex.into()),
        }
    }

    /// The fallback color, `(1, "#FFFFFF")`.
    pub fn default_color() -> Self {
        Self::new(DEFAULT_COLOR_ID, DEFAULT_COLOR_HEX)
    }

    /// The full catalog, in id order.
    pub fn catalog() -> Vec<Self> {
        DEFAULT_COLORS
            .iter()
            .map(|(id, hex)| Self::new(*id, *hex))
            .collect()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::default_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fourteen_entries_starting_with_white() {
        let catalog = Color::catalog();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog[0], Color::default_color());
        assert_eq!(catalog[13], Color::new(14, "#9E9E9E"));
    }
}
