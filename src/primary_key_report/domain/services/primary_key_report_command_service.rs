use async_trait::async_trait;

use crate::primary_key_report::domain::model::{
    commands::generate_primary_key_report_command::GeneratePrimaryKeyReportCommand,
    entities::primary_key_report_summary::PrimaryKeyReportSummary,
    enums::primary_key_report_domain_error::PrimaryKeyReportDomainError,
};

#[async_trait]
pub trait PrimaryKeyReportCommandService: Send + Sync {
    async fn handle_generate(
        &self,
        command: GeneratePrimaryKeyReportCommand,
    ) -> Result<PrimaryKeyReportSummary, PrimaryKeyReportDomainError>;
}
