//! The fixed note color catalog.
//!
//! The storage layer seeds its `colors` table from [`DEFAULT_COLORS`] on
//! first run, so ids here are the ids in the database.

use crate::types::DbId;

/// Id of the fallback color, used for new notes and dangling references.
pub const DEFAULT_COLOR_ID: DbId = 1;

/// Hex value of the fallback color.
pub const DEFAULT_COLOR_HEX: &str = "#FFFFFF";

/// The 14 predefined colors as `(id, hex)`, in id order.
pub const DEFAULT_COLORS: [(DbId, &str); 14] = [
    (DEFAULT_COLOR_ID, DEFAULT_COLOR_HEX), // White
    (2, "#E57373"),                        // Red
    (3, "#F06292"),                        // Pink
    (4, "#CE93D8"),                        // Purple
    (5, "#2196F3"),                        // Blue
    (6, "#00ACC1"),                        // Cyan
    (7, "#26A69A"),                        // Teal
    (8, "#4CAF50"),                        // Green
    (9, "#8BC34A"),                        // Light green
    (10, "#CDDC39"),                       // Lime
    (11, "#FFEB3B"),                       // Yellow
    (12, "#FF9800"),                       // Orange
    (13, "#BCAAA4"),                       // Brown
    (14, "#9E9E9E"),                       // Gray
];
