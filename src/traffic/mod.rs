mod aggregate;
mod filter;
pub mod style;

pub use aggregate::*;
pub use filter::*;
pub use style::{RadiusScale, flow_bucket};
