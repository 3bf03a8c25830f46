use std::sync::Arc;

use async_trait::async_trait;

use crate::primary_key_report::{
    domain::{
        model::{
            commands::generate_primary_key_report_command::GeneratePrimaryKeyReportCommand,
            entities::{
                primary_key_report_summary::PrimaryKeyReportSummary,
                table_declaration::TableDeclaration,
            },
            enums::primary_key_report_domain_error::PrimaryKeyReportDomainError,
        },
        services::{
            primary_key_report_command_service::PrimaryKeyReportCommandService,
            primary_key_resolver::PrimaryKeyResolver,
        },
    },
    infrastructure::{
        persistence::repositories::catalog_repository::CatalogRepository,
        reporting::report_writer::ReportWriter,
    },
};

pub struct PrimaryKeyReportCommandServiceImpl {
    catalog_repository: Arc<dyn CatalogRepository>,
    report_writer: Arc<dyn ReportWriter>,
}

impl PrimaryKeyReportCommandServiceImpl {
    pub fn new(
        catalog_repository: Arc<dyn CatalogRepository>,
        report_writer: Arc<dyn ReportWriter>,
    ) -> Self {
        Self {
            catalog_repository,
            report_writer,
        }
    }
}

#[async_trait]
impl PrimaryKeyReportCommandService for PrimaryKeyReportCommandServiceImpl {
    async fn handle_generate(
        &self,
        command: GeneratePrimaryKeyReportCommand,
    ) -> Result<PrimaryKeyReportSummary, PrimaryKeyReportDomainError> {
        let tables = self
            .catalog_repository
            .load_table_declarations()
            .await?
            .into_iter()
            .map(|record| {
                log::debug!(
                    "table_list ('{}', '{}')",
                    record.table_name(),
                    record.raw_primary_keys()
                );
                TableDeclaration::from_catalog_row(record.table_name(), record.raw_primary_keys())
            })
            .collect::<Vec<_>>();

        let columns = self.catalog_repository.load_column_declarations().await?;
        for column in &columns {
            log::debug!(
                "table_cols ('{}', '{}', '{}')",
                column.table_name(),
                column.column_name(),
                column.column_type()
            );
        }

        let resolved = PrimaryKeyResolver::resolve(&tables, &columns);
        for item in &resolved {
            for key in item.keys().iter() {
                log::debug!(
                    "resolved table_name='{}' column_name='{}' column_type='{}'",
                    item.table_name(),
                    key.key_name,
                    key.column_type
                );
            }
        }

        let lines_written = self
            .report_writer
            .write(command.output_path(), &resolved)
            .await?;

        log::debug!(
            "{} primary key line(s) for {} table(s) written to {}",
            lines_written,
            resolved.len(),
            command.output_path()
        );

        Ok(PrimaryKeyReportSummary {
            tables_loaded: tables.len(),
            columns_loaded: columns.len(),
            resolved_tables: resolved.len(),
            lines_written,
            output_path: command.output_path().to_string(),
        })
    }
}
