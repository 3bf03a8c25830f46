pub mod generate_primary_key_report_command;
