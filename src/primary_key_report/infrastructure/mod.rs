pub mod persistence;
pub mod reporting;
