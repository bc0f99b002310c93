mod performance;

pub use performance::performance_now;
