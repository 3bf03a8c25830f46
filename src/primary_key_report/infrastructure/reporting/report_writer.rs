use async_trait::async_trait;

use crate::primary_key_report::domain::model::{
    entities::resolved_primary_key::ResolvedPrimaryKey,
    enums::primary_key_report_domain_error::PrimaryKeyReportDomainError,
};

#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Writes one line per matched key and returns the number of lines written.
    async fn write(
        &self,
        output_path: &str,
        items: &[ResolvedPrimaryKey],
    ) -> Result<usize, PrimaryKeyReportDomainError>;
}

/// `<table>, <key>, <type>` lines in mapping order, without trailing newlines.
pub fn format_report_lines(items: &[ResolvedPrimaryKey]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| {
            item.keys().iter().map(move |key| {
                format!("{}, {}, {}", item.table_name(), key.key_name, key.column_type)
            })
        })
        .collect()
}
