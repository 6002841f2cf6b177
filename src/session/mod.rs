pub mod drill;
pub mod input;
