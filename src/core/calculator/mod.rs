pub mod aggregate;
pub mod breakdown;
pub mod period;
pub mod trend;
