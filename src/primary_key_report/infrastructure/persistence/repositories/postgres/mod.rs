pub mod sqlx_catalog_repository_impl;
pub mod sqlx_catalog_seed_repository_impl;
