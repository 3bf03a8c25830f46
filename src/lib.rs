pub mod config;
pub mod primary_key_report;
