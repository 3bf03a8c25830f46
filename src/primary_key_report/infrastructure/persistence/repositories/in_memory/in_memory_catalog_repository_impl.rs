use async_trait::async_trait;

use crate::primary_key_report::{
    domain::model::{
        entities::column_declaration::ColumnDeclaration,
        enums::primary_key_report_domain_error::PrimaryKeyReportDomainError,
    },
    infrastructure::persistence::{
        repositories::catalog_repository::{CatalogRepository, CatalogTableRecord},
        sample_catalog::{sample_column_declarations, sample_table_records},
    },
};

pub struct InMemoryCatalogRepositoryImpl {
    tables: Vec<CatalogTableRecord>,
    columns: Vec<ColumnDeclaration>,
}

impl InMemoryCatalogRepositoryImpl {
    pub fn new(tables: Vec<CatalogTableRecord>, columns: Vec<ColumnDeclaration>) -> Self {
        Self { tables, columns }
    }

    pub fn with_sample_catalog() -> Self {
        Self::new(sample_table_records(), sample_column_declarations())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepositoryImpl {
    async fn load_table_declarations(
        &self,
    ) -> Result<Vec<CatalogTableRecord>, PrimaryKeyReportDomainError> {
        Ok(self.tables.clone())
    }

    async fn load_column_declarations(
        &self,
    ) -> Result<Vec<ColumnDeclaration>, PrimaryKeyReportDomainError> {
        Ok(self.columns.clone())
    }
}
