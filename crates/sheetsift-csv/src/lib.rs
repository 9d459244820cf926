//! # sheetsift-csv
//!
//! CSV support for sheetsift: a reader turning a CSV file into a
//! [`RawSheet`](sheetsift_core::RawSheet) so it runs through the same
//! pipeline as workbook sheets, and a writer exporting a
//! [`Grid`](sheetsift_core::Grid).

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
