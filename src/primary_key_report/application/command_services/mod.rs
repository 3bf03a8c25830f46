pub mod primary_key_report_command_service_impl;
