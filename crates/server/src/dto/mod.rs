mod station;
pub use station::*;
