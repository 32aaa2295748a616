pub mod float;
pub mod statistics;
