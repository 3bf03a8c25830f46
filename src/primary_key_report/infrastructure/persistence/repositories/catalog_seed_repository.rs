use async_trait::async_trait;

use crate::primary_key_report::domain::model::enums::primary_key_report_domain_error::PrimaryKeyReportDomainError;

#[async_trait]
pub trait CatalogSeedRepository: Send + Sync {
    /// Creates the catalog tables when missing and fills them with the sample catalog
    /// if the table list is empty. Returns whether rows were inserted.
    async fn seed_sample_catalog(&self) -> Result<bool, PrimaryKeyReportDomainError>;
}
