use async_trait::async_trait;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};

use crate::primary_key_report::{
    domain::model::{
        entities::resolved_primary_key::ResolvedPrimaryKey,
        enums::primary_key_report_domain_error::PrimaryKeyReportDomainError,
    },
    infrastructure::reporting::report_writer::{ReportWriter, format_report_lines},
};

/// Writes the report to a UTF-8 file, truncating any previous content.
pub struct FileReportWriterImpl;

impl FileReportWriterImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileReportWriterImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportWriter for FileReportWriterImpl {
    async fn write(
        &self,
        output_path: &str,
        items: &[ResolvedPrimaryKey],
    ) -> Result<usize, PrimaryKeyReportDomainError> {
        let file = File::create(output_path)
            .await
            .map_err(|e| map_output_error(output_path, e))?;
        let mut writer = BufWriter::new(file);

        let lines = format_report_lines(items);
        for line in &lines {
            writer
                .write_all(line.as_bytes())
                .await
                .map_err(|e| map_output_error(output_path, e))?;
            writer
                .write_all(b"\n")
                .await
                .map_err(|e| map_output_error(output_path, e))?;
        }

        writer
            .flush()
            .await
            .map_err(|e| map_output_error(output_path, e))?;

        Ok(lines.len())
    }
}

fn map_output_error(output_path: &str, error: std::io::Error) -> PrimaryKeyReportDomainError {
    PrimaryKeyReportDomainError::OutputWriteFailure(format!("{output_path}: {error}"))
}
