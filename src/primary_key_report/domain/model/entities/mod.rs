pub mod column_declaration;
pub mod primary_key_report_summary;
pub mod resolved_primary_key;
pub mod table_declaration;
