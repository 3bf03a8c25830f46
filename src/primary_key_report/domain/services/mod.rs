pub mod primary_key_report_command_service;
pub mod primary_key_resolver;
