#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnDeclaration {
    table_name: String,
    column_name: String,
    column_type: String,
}

impl ColumnDeclaration {
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            column_type: column_type.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn column_type(&self) -> &str {
        &self.column_type
    }
}
