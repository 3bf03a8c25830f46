use crate::primary_key_report::domain::model::value_objects::primary_key_list::PrimaryKeyList;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableDeclaration {
    table_name: String,
    declared_primary_key_names: PrimaryKeyList,
}

impl TableDeclaration {
    pub fn new(table_name: impl Into<String>, declared_primary_key_names: PrimaryKeyList) -> Self {
        Self {
            table_name: table_name.into(),
            declared_primary_key_names,
        }
    }

    /// Builds a declaration from one catalog row holding the raw, comma-delimited key string.
    pub fn from_catalog_row(table_name: impl Into<String>, raw_primary_keys: &str) -> Self {
        Self::new(table_name, PrimaryKeyList::parse(raw_primary_keys))
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn declared_primary_key_names(&self) -> &PrimaryKeyList {
        &self.declared_primary_key_names
    }
}
