pub mod addresses;
pub mod health;
pub mod lookups;
pub mod stats;

pub use health::health_check;
pub use stats::get_stats;
