pub mod gf2;
pub mod codes;
pub mod graph;
pub mod xof;
pub mod attack;

pub use gf2::{Gf2Matrix, Gf2Vector};
pub use attack::{ChizhovBorodin, MinderShokrollahi};
