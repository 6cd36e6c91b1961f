pub mod lensing;
pub mod palette;
pub mod snapshot;
