use serde::{Deserialize, Serialize};

use super::color::ClaimColor;
use super::coordinates::CellCoords;

/// One claimed cell: the binding of a coordinate key to an owner and color.
///
/// Two claims refer to the same cell iff their `coordinates` strings are
/// equal. Claims are immutable once accepted by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellClaim {
    pub coordinates: String,
    pub owner: String,
    pub color: ClaimColor,
}

impl CellClaim {
    pub fn new(
        coordinates: impl Into<String>,
        owner: impl Into<String>,
        color: ClaimColor,
    ) -> Self {
        Self {
            coordinates: coordinates.into(),
            owner: owner.into(),
            color,
        }
    }
}

/// A validated form post: the cells one user selected together with the
/// owner label and color they chose for all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimRequest {
    pub cells: Vec<CellCoords>,
    pub owner: String,
    pub color: ClaimColor,
}

impl ClaimRequest {
    /// Expand the request into the candidate claims handed to the ledger,
    /// one per selected cell, with canonical coordinate keys.
    pub fn into_claims(self) -> Vec<CellClaim> {
        let ClaimRequest {
            cells,
            owner,
            color,
        } = self;
        cells
            .into_iter()
            .map(|coords| CellClaim::new(coords.key(), owner.clone(), color))
            .collect()
    }
}
