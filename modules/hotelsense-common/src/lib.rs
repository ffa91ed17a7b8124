pub mod config;
pub mod error;
pub mod pricing;
pub mod types;

pub use config::Config;
pub use error::HotelSenseError;
pub use pricing::{nights_between, TripBudget};
pub use types::*;
