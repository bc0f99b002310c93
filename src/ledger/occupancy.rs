use std::sync::{Arc, Mutex};

use crate::types::CellClaim;

/// The authoritative set of claimed cells.
///
/// All reads and writes go through one coarse mutex, so `try_claim`'s
/// check-then-insert is indivisible with respect to every other call and a
/// `snapshot` never observes a half-applied batch. The handle is cheap to
/// clone; clones share the same storage.
///
/// Storage is an insertion-ordered vector with a linear membership scan per
/// candidate. The board is bounded (GRID_ROWS * GRID_COLS cells), so the
/// O(batch * stored) scan stays trivial.
#[derive(Clone, Default)]
pub struct OccupancyLedger {
    claims: Arc<Mutex<Vec<CellClaim>>>,
}

impl OccupancyLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy out all stored claims.
    ///
    /// The returned vector is independent of the ledger: later claims do not
    /// appear in it, and mutating it does not touch the ledger.
    pub fn snapshot(&self) -> Vec<CellClaim> {
        self.lock().clone()
    }

    /// Attempt to claim every cell in `requested`, all or nothing.
    ///
    /// Returns `false` and leaves the ledger untouched if any candidate's
    /// coordinates are already stored, or if the batch claims the same cell
    /// twice. Returns `true` after storing every candidate otherwise. An
    /// empty batch succeeds without changing anything.
    pub fn try_claim(&self, requested: &[CellClaim]) -> bool {
        let mut stored = self.lock();

        for (index, candidate) in requested.iter().enumerate() {
            let occupied = stored
                .iter()
                .any(|claim| claim.coordinates == candidate.coordinates);
            let duplicated = requested[..index]
                .iter()
                .any(|earlier| earlier.coordinates == candidate.coordinates);
            if occupied || duplicated {
                return false;
            }
        }

        stored.extend_from_slice(requested);
        true
    }

    /// Number of stored claims.
    pub fn claimed_count(&self) -> usize {
        self.lock().len()
    }

    /// Whether the given coordinate key is already claimed.
    pub fn is_claimed(&self, coordinates: &str) -> bool {
        self.lock()
            .iter()
            .any(|claim| claim.coordinates == coordinates)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CellClaim>> {
        // A poisoned lock means a panic mid-mutation; the ledger has no
        // recovery story for that, so fail fast.
        self.claims.lock().expect("claim storage lock poisoned")
    }
}
