#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimaryKeyReportSummary {
    pub tables_loaded: usize,
    pub columns_loaded: usize,
    pub resolved_tables: usize,
    pub lines_written: usize,
    pub output_path: String,
}
