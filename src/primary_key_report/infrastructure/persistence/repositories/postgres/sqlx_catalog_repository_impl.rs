use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::primary_key_report::{
    domain::model::{
        entities::column_declaration::ColumnDeclaration,
        enums::primary_key_report_domain_error::PrimaryKeyReportDomainError,
    },
    infrastructure::persistence::repositories::catalog_repository::{
        CatalogRepository, CatalogTableRecord, column_declaration_from_nullable_row,
    },
};

/// Runs the configured catalog SELECTs as given. Result columns are read by position so
/// any aliasing in a custom query works: the table list yields `(table, pk)` and the
/// column list yields `(table, column, type)`. NULLs never fail the load.
pub struct SqlxCatalogRepositoryImpl {
    pool: PgPool,
    table_list_query: String,
    column_list_query: String,
}

impl SqlxCatalogRepositoryImpl {
    pub fn new(pool: PgPool, table_list_query: String, column_list_query: String) -> Self {
        Self {
            pool,
            table_list_query,
            column_list_query,
        }
    }
}

#[async_trait]
impl CatalogRepository for SqlxCatalogRepositoryImpl {
    async fn load_table_declarations(
        &self,
    ) -> Result<Vec<CatalogTableRecord>, PrimaryKeyReportDomainError> {
        let rows = sqlx::query(&self.table_list_query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_catalog_error)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let table_name: Option<String> = row.try_get(0).map_err(map_catalog_error)?;
            let raw_primary_keys: Option<String> = row.try_get(1).map_err(map_catalog_error)?;
            match CatalogTableRecord::from_nullable_row(table_name, raw_primary_keys) {
                Some(record) => records.push(record),
                None => log::warn!("skipping table list row with NULL table name"),
            }
        }

        Ok(records)
    }

    async fn load_column_declarations(
        &self,
    ) -> Result<Vec<ColumnDeclaration>, PrimaryKeyReportDomainError> {
        let rows = sqlx::query(&self.column_list_query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_catalog_error)?;

        let mut declarations = Vec::with_capacity(rows.len());
        for row in rows {
            let table_name: Option<String> = row.try_get(0).map_err(map_catalog_error)?;
            let column_name: Option<String> = row.try_get(1).map_err(map_catalog_error)?;
            let column_type: Option<String> = row.try_get(2).map_err(map_catalog_error)?;
            match column_declaration_from_nullable_row(table_name, column_name, column_type) {
                Some(declaration) => declarations.push(declaration),
                None => log::warn!("skipping column list row with NULL table or column name"),
            }
        }

        Ok(declarations)
    }
}

pub(crate) fn map_catalog_error(error: sqlx::Error) -> PrimaryKeyReportDomainError {
    PrimaryKeyReportDomainError::CatalogUnavailable(error.to_string())
}
