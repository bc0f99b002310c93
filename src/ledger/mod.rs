mod occupancy;

pub use occupancy::OccupancyLedger;
