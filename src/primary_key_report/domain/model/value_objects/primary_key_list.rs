/// Ordered primary-key names declared for a table, as listed in the catalog.
///
/// Names keep their original casing and order. Blank fragments (for example from a
/// trailing comma) are kept as empty names and are skipped when matching.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrimaryKeyList(Vec<String>);

impl PrimaryKeyList {
    /// Splits a comma-delimited key string and trims each piece.
    ///
    /// Total over any input: `""` yields a single empty name.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(',').map(|key| key.trim().to_string()).collect())
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
