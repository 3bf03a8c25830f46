pub mod file_report_writer_impl;
pub mod report_writer;
