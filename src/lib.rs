mod constants;
mod dependency;
mod ledger;
mod service;
mod types;

pub use constants::{COORDINATE_SEPARATOR, GRID_COLS, GRID_ROWS};
pub use ledger::OccupancyLedger;
pub use service::{ClaimBoard, ClaimInputError, ClaimOutcome};
pub use types::{BoardMetrics, CellClaim, CellCoords, ClaimColor, ClaimRequest};
