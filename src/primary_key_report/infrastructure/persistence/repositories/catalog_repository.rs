use async_trait::async_trait;

use crate::primary_key_report::domain::model::{
    entities::column_declaration::ColumnDeclaration,
    enums::primary_key_report_domain_error::PrimaryKeyReportDomainError,
};

/// One catalog row per table, with the primary-key list still in its raw delimited form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogTableRecord {
    table_name: String,
    raw_primary_keys: String,
}

impl CatalogTableRecord {
    pub fn new(table_name: impl Into<String>, raw_primary_keys: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            raw_primary_keys: raw_primary_keys.into(),
        }
    }

    /// Maps a table-list row whose values may be NULL. A row without a table name cannot
    /// be joined to any column and is dropped; a NULL key list reads as `""`.
    pub fn from_nullable_row(
        table_name: Option<String>,
        raw_primary_keys: Option<String>,
    ) -> Option<Self> {
        Some(Self::new(table_name?, raw_primary_keys.unwrap_or_default()))
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn raw_primary_keys(&self) -> &str {
        &self.raw_primary_keys
    }
}

/// Maps a column-list row whose values may be NULL. Rows missing a table or column name
/// are dropped; a NULL type reads as `""`.
pub fn column_declaration_from_nullable_row(
    table_name: Option<String>,
    column_name: Option<String>,
    column_type: Option<String>,
) -> Option<ColumnDeclaration> {
    Some(ColumnDeclaration::new(
        table_name?,
        column_name?,
        column_type.unwrap_or_default(),
    ))
}

/// Read side of the metadata catalog. Rows come back in the order the store yields them.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn load_table_declarations(
        &self,
    ) -> Result<Vec<CatalogTableRecord>, PrimaryKeyReportDomainError>;

    async fn load_column_declarations(
        &self,
    ) -> Result<Vec<ColumnDeclaration>, PrimaryKeyReportDomainError>;
}
