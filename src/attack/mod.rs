pub mod error;
pub mod params;
pub mod schur;
pub mod reduction;
pub mod minder_shokrollahi;
pub mod chizhov_borodin;

pub use error::*;
pub use chizhov_borodin::ChizhovBorodin;
pub use minder_shokrollahi::MinderShokrollahi;
pub use params::{RmInstance, RmParams};
