pub mod repositories;
pub mod sample_catalog;
