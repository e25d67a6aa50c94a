pub mod rm;
pub mod tools;
