/// Formatter adapters for the report output
mod csv_formatter;

pub use csv_formatter::{CsvFormatter, REPORT_HEADER};
