use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrimaryKeyReportDomainError {
    #[error("output path is required")]
    InvalidOutputPath,

    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("failed to write report: {0}")]
    OutputWriteFailure(String),
}
