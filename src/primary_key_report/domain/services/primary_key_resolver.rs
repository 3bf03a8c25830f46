use crate::primary_key_report::domain::model::entities::{
    column_declaration::ColumnDeclaration,
    resolved_primary_key::{PrimaryKeyColumns, ResolvedPrimaryKey},
    table_declaration::TableDeclaration,
};

/// Reconciles each table's declared primary-key names against its catalog columns.
pub struct PrimaryKeyResolver;

impl PrimaryKeyResolver {
    /// Table names must match exactly; key and column names match ignoring case.
    /// Blank declared keys never match. Output follows the order of `tables`; tables
    /// without any match are omitted.
    pub fn resolve(
        tables: &[TableDeclaration],
        columns: &[ColumnDeclaration],
    ) -> Vec<ResolvedPrimaryKey> {
        tables
            .iter()
            .filter_map(|table| {
                let mut found = PrimaryKeyColumns::new();

                for column in columns
                    .iter()
                    .filter(|column| column.table_name() == table.table_name())
                {
                    for key in table.declared_primary_key_names().iter() {
                        if !key.is_empty() && names_match_ignoring_case(key, column.column_name()) {
                            found.insert(key, column.column_type());
                        }
                    }
                }

                (!found.is_empty()).then(|| ResolvedPrimaryKey::new(table.table_name(), found))
            })
            .collect()
    }
}

/// Character-wise comparison that folds both upper and lower case, so `ID` matches `id`
/// and non-ASCII letters fold the same way.
fn names_match_ignoring_case(left: &str, right: &str) -> bool {
    left.chars().count() == right.chars().count()
        && left.chars().zip(right.chars()).all(|(l, r)| {
            l == r
                || l.to_uppercase().eq(r.to_uppercase())
                || l.to_lowercase().eq(r.to_lowercase())
        })
}
