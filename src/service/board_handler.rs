use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::constants::{GRID_COLS, GRID_ROWS};
use crate::dependency::performance_now;
use crate::ledger::OccupancyLedger;
use crate::types::{BoardMetrics, CellCoords, ClaimColor, ClaimRequest};

/// Result of one claim submission, serialized back to the JS layer.
///
/// The host turns `Rejected` into its "some cells already occupied" message;
/// `Invalid` carries the message for malformed form input directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClaimOutcome {
    Accepted,
    Rejected,
    Invalid { message: String },
}

/// Form input the handler refuses before the ledger is ever consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimInputError {
    EmptySelection,
    EmptyOwner,
    UnknownColor(String),
    BadCoordinates(String),
}

impl fmt::Display for ClaimInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimInputError::EmptySelection => write!(f, "no cells selected"),
            ClaimInputError::EmptyOwner => write!(f, "owner must not be empty"),
            ClaimInputError::UnknownColor(label) => {
                write!(f, "unknown color \"{}\"", label)
            }
            ClaimInputError::BadCoordinates(key) => {
                write!(f, "invalid cell coordinates \"{}\"", key)
            }
        }
    }
}

/// The claim board the JS web layer drives: one occupancy ledger plus the
/// form validation and JsValue conversion in front of it.
#[wasm_bindgen]
pub struct ClaimBoard {
    rows: u32,
    cols: u32,
    ledger: OccupancyLedger,
    metrics: BoardMetrics,
}

#[wasm_bindgen]
impl ClaimBoard {
    /// Create the standard 10x10 board with an empty ledger.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_dimensions(GRID_ROWS, GRID_COLS)
    }

    #[wasm_bindgen]
    pub fn with_dimensions(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ledger: OccupancyLedger::new(),
            metrics: BoardMetrics::default(),
        }
    }

    #[wasm_bindgen]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[wasm_bindgen]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[wasm_bindgen]
    pub fn cell_count(&self) -> u32 {
        self.rows * self.cols
    }

    #[wasm_bindgen]
    pub fn claimed_count(&self) -> usize {
        self.ledger.claimed_count()
    }

    #[wasm_bindgen]
    pub fn is_claimed(&self, coordinates: &str) -> bool {
        self.ledger.is_claimed(coordinates)
    }

    /// Handle one form post from the host: an array of coordinate key
    /// strings plus the owner and color entered in the form.
    #[wasm_bindgen]
    pub fn submit_claim(&mut self, coordinates: JsValue, owner: &str, color: &str) -> JsValue {
        let keys: Vec<String> = match serde_wasm_bindgen::from_value(coordinates) {
            Ok(keys) => keys,
            Err(err) => {
                let outcome = ClaimOutcome::Invalid {
                    message: format!("malformed coordinate list: {}", err),
                };
                return serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL);
            }
        };

        let outcome = self.submit(&keys, owner, color);
        serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL)
    }

    /// Serialize the current claims for rendering.
    #[wasm_bindgen]
    pub fn snapshot(&mut self) -> JsValue {
        let start = performance_now();
        let snapshot = self.ledger.snapshot();
        let result = serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL);
        let end = performance_now();
        if start > 0.0 && end >= start {
            self.metrics.update_snapshot(end - start);
        }
        result
    }

    #[wasm_bindgen]
    pub fn last_claim_duration_ms(&self) -> f64 {
        self.metrics.last_claim_duration_ms
    }

    #[wasm_bindgen]
    pub fn last_snapshot_duration_ms(&self) -> f64 {
        self.metrics.last_snapshot_duration_ms
    }
}

impl ClaimBoard {
    /// Validate one form post and run it against the ledger.
    pub fn submit(&mut self, keys: &[String], owner: &str, color: &str) -> ClaimOutcome {
        let request = match self.build_request(keys, owner, color) {
            Ok(request) => request,
            Err(err) => {
                return ClaimOutcome::Invalid {
                    message: err.to_string(),
                }
            }
        };

        let start = performance_now();
        let accepted = self.ledger.try_claim(&request.into_claims());
        let end = performance_now();
        if start > 0.0 && end >= start {
            self.metrics.update_claim(end - start);
        }

        if accepted {
            ClaimOutcome::Accepted
        } else {
            ClaimOutcome::Rejected
        }
    }

    /// Shared ledger handle, for embedding the board next to other readers.
    pub fn ledger(&self) -> OccupancyLedger {
        self.ledger.clone()
    }

    fn build_request(
        &self,
        keys: &[String],
        owner: &str,
        color: &str,
    ) -> Result<ClaimRequest, ClaimInputError> {
        if keys.is_empty() {
            return Err(ClaimInputError::EmptySelection);
        }

        let owner = owner.trim();
        if owner.is_empty() {
            return Err(ClaimInputError::EmptyOwner);
        }

        let color = ClaimColor::parse(color)
            .ok_or_else(|| ClaimInputError::UnknownColor(color.to_string()))?;

        let mut cells = Vec::with_capacity(keys.len());
        for key in keys {
            let coords = CellCoords::parse(key)
                .filter(|coords| coords.in_bounds(self.rows, self.cols))
                .ok_or_else(|| ClaimInputError::BadCoordinates(key.clone()))?;
            cells.push(coords);
        }

        Ok(ClaimRequest {
            cells,
            owner: owner.to_string(),
            color,
        })
    }
}

impl Default for ClaimBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|key| key.to_string()).collect()
    }

    #[test]
    fn creates_standard_board() {
        let board = ClaimBoard::new();
        assert_eq!(board.rows(), 10);
        assert_eq!(board.cols(), 10);
        assert_eq!(board.cell_count(), 100);
        assert_eq!(board.claimed_count(), 0);
    }

    #[test]
    fn accepts_a_valid_claim() {
        let mut board = ClaimBoard::new();
        let outcome = board.submit(&keys(&["0 0"]), "A", "Red");
        assert_eq!(outcome, ClaimOutcome::Accepted);
        assert_eq!(board.claimed_count(), 1);
        assert!(board.is_claimed("0 0"));
    }

    #[test]
    fn rejects_overlapping_claim() {
        let mut board = ClaimBoard::new();
        assert_eq!(board.submit(&keys(&["0 0"]), "A", "Red"), ClaimOutcome::Accepted);

        let outcome = board.submit(&keys(&["0 0"]), "B", "Blue");
        assert_eq!(outcome, ClaimOutcome::Rejected);

        // First owner keeps the cell
        let snapshot = board.ledger().snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].owner, "A");
    }

    #[test]
    fn rejects_partially_overlapping_batch_whole() {
        let mut board = ClaimBoard::new();
        assert_eq!(board.submit(&keys(&["5 5"]), "A", "Green"), ClaimOutcome::Accepted);

        let outcome = board.submit(&keys(&["4 4", "5 5"]), "B", "Blue");
        assert_eq!(outcome, ClaimOutcome::Rejected);
        assert!(!board.is_claimed("4 4"));
        assert_eq!(board.claimed_count(), 1);
    }

    #[test]
    fn empty_selection_is_invalid_and_skips_the_ledger() {
        let mut board = ClaimBoard::new();
        let outcome = board.submit(&[], "A", "Red");
        assert!(matches!(outcome, ClaimOutcome::Invalid { .. }));
        assert_eq!(board.claimed_count(), 0);
    }

    #[test]
    fn blank_owner_is_invalid() {
        let mut board = ClaimBoard::new();
        let outcome = board.submit(&keys(&["1 1"]), "   ", "Red");
        assert_eq!(
            outcome,
            ClaimOutcome::Invalid {
                message: "owner must not be empty".to_string()
            }
        );
        assert_eq!(board.claimed_count(), 0);
    }

    #[test]
    fn unknown_color_is_invalid() {
        let mut board = ClaimBoard::new();
        let outcome = board.submit(&keys(&["1 1"]), "A", "magenta");
        assert_eq!(
            outcome,
            ClaimOutcome::Invalid {
                message: "unknown color \"magenta\"".to_string()
            }
        );
        assert_eq!(board.claimed_count(), 0);
    }

    #[test]
    fn color_labels_match_case_insensitively() {
        let mut board = ClaimBoard::new();
        assert_eq!(board.submit(&keys(&["1 1"]), "A", "rEd"), ClaimOutcome::Accepted);
    }

    #[test]
    fn out_of_bounds_coordinates_are_invalid() {
        let mut board = ClaimBoard::new();
        let outcome = board.submit(&keys(&["10 0"]), "A", "Red");
        assert_eq!(
            outcome,
            ClaimOutcome::Invalid {
                message: "invalid cell coordinates \"10 0\"".to_string()
            }
        );
        assert_eq!(board.claimed_count(), 0);
    }

    #[test]
    fn malformed_coordinates_are_invalid() {
        let mut board = ClaimBoard::new();
        let outcome = board.submit(&keys(&["3,7"]), "A", "Red");
        assert!(matches!(outcome, ClaimOutcome::Invalid { .. }));
        assert_eq!(board.claimed_count(), 0);
    }

    #[test]
    fn one_bad_key_invalidates_the_whole_batch() {
        let mut board = ClaimBoard::new();
        let outcome = board.submit(&keys(&["1 1", "not a key"]), "A", "Red");
        assert!(matches!(outcome, ClaimOutcome::Invalid { .. }));
        assert!(!board.is_claimed("1 1"));
    }

    #[test]
    fn coordinate_keys_are_canonicalized_before_storage() {
        let mut board = ClaimBoard::new();
        assert_eq!(board.submit(&keys(&["03 7"]), "A", "Red"), ClaimOutcome::Accepted);
        assert!(board.is_claimed("3 7"));

        // The padded and canonical spellings are the same cell
        assert_eq!(board.submit(&keys(&["3 7"]), "B", "Blue"), ClaimOutcome::Rejected);
    }

    #[test]
    fn custom_dimensions_bound_validation() {
        let mut board = ClaimBoard::with_dimensions(2, 2);
        assert_eq!(board.cell_count(), 4);
        assert_eq!(board.submit(&keys(&["1 1"]), "A", "Red"), ClaimOutcome::Accepted);
        assert!(matches!(
            board.submit(&keys(&["2 0"]), "A", "Red"),
            ClaimOutcome::Invalid { .. }
        ));
    }

    #[test]
    fn board_fills_up_cell_by_cell() {
        let mut board = ClaimBoard::with_dimensions(2, 2);
        for row in 0..2 {
            for col in 0..2 {
                let key = format!("{} {}", row, col);
                assert_eq!(board.submit(&[key], "A", "Red"), ClaimOutcome::Accepted);
            }
        }
        assert_eq!(board.claimed_count() as u32, board.cell_count());
        assert_eq!(board.submit(&keys(&["0 0"]), "B", "Blue"), ClaimOutcome::Rejected);
    }
}
