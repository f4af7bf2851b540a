pub mod aggregation;
pub mod campaigns;
pub mod constants;
pub mod errors;
pub mod export;
pub mod metrics;
pub mod session;
pub mod trends;
pub mod utils;

pub use errors::{Error, Result};
pub use campaigns::*;
