use crate::primary_key_report::{
    domain::model::entities::column_declaration::ColumnDeclaration,
    infrastructure::persistence::repositories::catalog_repository::CatalogTableRecord,
};

pub const SAMPLE_TABLE_ROWS: &[(&str, &str)] =
    &[("users", "ID"), ("accounts", "account, account_id")];

pub const SAMPLE_COLUMN_ROWS: &[(&str, &str, &str)] = &[
    ("users", "first_name", "VARCHAR(32)"),
    ("users", "second_name", "VARCHAR(32)"),
    ("users", "id", "INT"),
    ("accounts", "register_date", "TIMESTAMP"),
    ("accounts", "CARD_NUMBER", "INT"),
    ("accounts", "ACCOUNT", "VARCHAR(32)"),
    ("accounts", "ACCOUNT_ID", "INT"),
];

pub fn sample_table_records() -> Vec<CatalogTableRecord> {
    SAMPLE_TABLE_ROWS
        .iter()
        .map(|(table_name, raw_primary_keys)| {
            CatalogTableRecord::new(*table_name, *raw_primary_keys)
        })
        .collect()
}

pub fn sample_column_declarations() -> Vec<ColumnDeclaration> {
    SAMPLE_COLUMN_ROWS
        .iter()
        .map(|(table_name, column_name, column_type)| {
            ColumnDeclaration::new(*table_name, *column_name, *column_type)
        })
        .collect()
}
