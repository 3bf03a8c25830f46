pub mod in_memory_catalog_repository_impl;
