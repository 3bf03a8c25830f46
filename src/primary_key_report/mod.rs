use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::app_config::{AppConfig, CatalogSource},
    primary_key_report::{
        application::command_services::primary_key_report_command_service_impl::PrimaryKeyReportCommandServiceImpl,
        domain::{
            model::{
                commands::generate_primary_key_report_command::GeneratePrimaryKeyReportCommand,
                entities::primary_key_report_summary::PrimaryKeyReportSummary,
                enums::primary_key_report_domain_error::PrimaryKeyReportDomainError,
            },
            services::primary_key_report_command_service::PrimaryKeyReportCommandService,
        },
        infrastructure::{
            persistence::repositories::{
                catalog_repository::CatalogRepository,
                catalog_seed_repository::CatalogSeedRepository,
                in_memory::in_memory_catalog_repository_impl::InMemoryCatalogRepositoryImpl,
                postgres::{
                    sqlx_catalog_repository_impl::{SqlxCatalogRepositoryImpl, map_catalog_error},
                    sqlx_catalog_seed_repository_impl::SqlxCatalogSeedRepositoryImpl,
                },
            },
            reporting::file_report_writer_impl::FileReportWriterImpl,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;

/// Runs load, resolve and write once against the catalog selected by `config`.
///
/// A PostgreSQL pool opened here is closed before returning, whether the run succeeded
/// or not.
pub async fn run_primary_key_report(
    config: &AppConfig,
) -> Result<PrimaryKeyReportSummary, PrimaryKeyReportDomainError> {
    let command = GeneratePrimaryKeyReportCommand::new(config.output_path.clone())?;

    match config.catalog_source {
        CatalogSource::Sample => {
            log::info!("using the built-in sample catalog");
            let service = build_primary_key_report_service(Arc::new(
                InMemoryCatalogRepositoryImpl::with_sample_catalog(),
            ));
            service.handle_generate(command).await
        }
        CatalogSource::Postgres => {
            let pool = PgPool::connect(&config.catalog_database_url())
                .await
                .map_err(map_catalog_error)?;
            log::info!(
                "connection established to catalog database {}:{}/{}",
                config.postgres_host,
                config.postgres_port,
                config.postgres_database
            );

            let result = run_against_pool(&pool, config, command).await;
            pool.close().await;
            log::debug!("catalog database connection closed");
            result
        }
    }
}

async fn run_against_pool(
    pool: &PgPool,
    config: &AppConfig,
    command: GeneratePrimaryKeyReportCommand,
) -> Result<PrimaryKeyReportSummary, PrimaryKeyReportDomainError> {
    if config.seed_sample_data {
        let seeded = SqlxCatalogSeedRepositoryImpl::new(pool.clone())
            .seed_sample_catalog()
            .await?;
        if seeded {
            log::info!("catalog tables seeded with sample data");
        } else {
            log::info!("catalog tables already populated; seeding skipped");
        }
    }

    let service = build_primary_key_report_service(Arc::new(SqlxCatalogRepositoryImpl::new(
        pool.clone(),
        config.table_list_query.clone(),
        config.column_list_query.clone(),
    )));
    service.handle_generate(command).await
}

pub fn build_primary_key_report_service(
    catalog_repository: Arc<dyn CatalogRepository>,
) -> PrimaryKeyReportCommandServiceImpl {
    PrimaryKeyReportCommandServiceImpl::new(
        catalog_repository,
        Arc::new(FileReportWriterImpl::new()),
    )
}
