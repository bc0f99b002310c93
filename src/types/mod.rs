pub mod claim;
pub mod color;
pub mod coordinates;
pub mod metrics;

pub use claim::{CellClaim, ClaimRequest};
pub use color::ClaimColor;
pub use coordinates::CellCoords;
pub use metrics::BoardMetrics;
