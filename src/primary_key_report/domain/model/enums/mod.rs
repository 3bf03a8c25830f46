pub mod primary_key_report_domain_error;
