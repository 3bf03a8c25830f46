#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimaryKeyColumn {
    pub key_name: String,
    pub column_type: String,
}

/// Matched key name to column type, kept in first-insertion order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrimaryKeyColumns(Vec<PrimaryKeyColumn>);

impl PrimaryKeyColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins: an existing key keeps its position and takes the new type.
    pub fn insert(&mut self, key_name: &str, column_type: &str) {
        match self.0.iter_mut().find(|entry| entry.key_name == key_name) {
            Some(entry) => entry.column_type = column_type.to_string(),
            None => self.0.push(PrimaryKeyColumn {
                key_name: key_name.to_string(),
                column_type: column_type.to_string(),
            }),
        }
    }

    pub fn get(&self, key_name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.key_name == key_name)
            .map(|entry| entry.column_type.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimaryKeyColumn> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedPrimaryKey {
    table_name: String,
    keys: PrimaryKeyColumns,
}

impl ResolvedPrimaryKey {
    pub fn new(table_name: impl Into<String>, keys: PrimaryKeyColumns) -> Self {
        Self {
            table_name: table_name.into(),
            keys,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn keys(&self) -> &PrimaryKeyColumns {
        &self.keys
    }
}
