pub mod vector;
pub mod matrix;

pub use vector::Gf2Vector;
pub use matrix::Gf2Matrix;
