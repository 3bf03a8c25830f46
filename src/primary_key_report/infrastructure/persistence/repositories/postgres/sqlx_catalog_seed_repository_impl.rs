use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::primary_key_report::{
    domain::model::enums::primary_key_report_domain_error::PrimaryKeyReportDomainError,
    infrastructure::persistence::{
        repositories::{
            catalog_seed_repository::CatalogSeedRepository,
            postgres::sqlx_catalog_repository_impl::map_catalog_error,
        },
        sample_catalog::{SAMPLE_COLUMN_ROWS, SAMPLE_TABLE_ROWS},
    },
};

pub struct SqlxCatalogSeedRepositoryImpl {
    pool: PgPool,
}

impl SqlxCatalogSeedRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogSeedRepository for SqlxCatalogSeedRepositoryImpl {
    async fn seed_sample_catalog(&self) -> Result<bool, PrimaryKeyReportDomainError> {
        let mut tx = self.pool.begin().await.map_err(map_catalog_error)?;

        let create_table_list_statement = r#"
            CREATE TABLE IF NOT EXISTS table_list (
                table_name VARCHAR(32) NOT NULL,
                pk VARCHAR(256)
            )
        "#;
        let create_table_cols_statement = r#"
            CREATE TABLE IF NOT EXISTS table_cols (
                table_name VARCHAR(32) NOT NULL,
                column_name VARCHAR(32) NOT NULL,
                column_type VARCHAR(32) NOT NULL
            )
        "#;

        sqlx::query(create_table_list_statement)
            .execute(&mut *tx)
            .await
            .map_err(map_catalog_error)?;
        sqlx::query(create_table_cols_statement)
            .execute(&mut *tx)
            .await
            .map_err(map_catalog_error)?;

        let existing: i64 = sqlx::query("SELECT COUNT(*) AS total FROM table_list")
            .fetch_one(&mut *tx)
            .await
            .map_err(map_catalog_error)?
            .try_get("total")
            .map_err(map_catalog_error)?;

        if existing > 0 {
            tx.commit().await.map_err(map_catalog_error)?;
            return Ok(false);
        }

        for (table_name, raw_primary_keys) in SAMPLE_TABLE_ROWS {
            sqlx::query("INSERT INTO table_list (table_name, pk) VALUES ($1, $2)")
                .bind(*table_name)
                .bind(*raw_primary_keys)
                .execute(&mut *tx)
                .await
                .map_err(map_catalog_error)?;
        }

        for (table_name, column_name, column_type) in SAMPLE_COLUMN_ROWS {
            sqlx::query(
                "INSERT INTO table_cols (table_name, column_name, column_type) VALUES ($1, $2, $3)",
            )
            .bind(*table_name)
            .bind(*column_name)
            .bind(*column_type)
            .execute(&mut *tx)
            .await
            .map_err(map_catalog_error)?;
        }

        tx.commit().await.map_err(map_catalog_error)?;
        Ok(true)
    }
}
