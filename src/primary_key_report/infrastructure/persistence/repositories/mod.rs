pub mod catalog_repository;
pub mod catalog_seed_repository;
pub mod in_memory;
pub mod postgres;
