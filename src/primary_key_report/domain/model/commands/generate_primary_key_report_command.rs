use crate::primary_key_report::domain::model::enums::primary_key_report_domain_error::PrimaryKeyReportDomainError;

#[derive(Clone, Debug)]
pub struct GeneratePrimaryKeyReportCommand {
    output_path: String,
}

impl GeneratePrimaryKeyReportCommand {
    pub fn new(output_path: String) -> Result<Self, PrimaryKeyReportDomainError> {
        if output_path.trim().is_empty() {
            return Err(PrimaryKeyReportDomainError::InvalidOutputPath);
        }

        Ok(Self { output_path })
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }
}
