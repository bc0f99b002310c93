use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::COORDINATE_SEPARATOR;

/// A parsed grid cell position.
///
/// The canonical identity of a cell is its key string (`"3 7"`); this type
/// exists so the service layer can validate incoming keys and re-render them
/// in canonical form before they reach the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoords {
    pub row: u32,
    pub col: u32,
}

impl CellCoords {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a coordinate key of the form `"{row} {col}"`.
    ///
    /// Returns `None` for anything that is not exactly two unsigned integers
    /// separated by the canonical separator.
    pub fn parse(key: &str) -> Option<Self> {
        let mut parts = key.split(COORDINATE_SEPARATOR);
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { row, col })
    }

    /// Render the canonical key string for this cell.
    pub fn key(&self) -> String {
        format!("{}{}{}", self.row, COORDINATE_SEPARATOR, self.col)
    }

    pub fn in_bounds(&self, rows: u32, cols: u32) -> bool {
        self.row < rows && self.col < cols
    }
}

impl fmt::Display for CellCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.row, COORDINATE_SEPARATOR, self.col)
    }
}
