pub mod row;

pub use row::{is_header_row, row_is_excluded, split_columns, COLUMN_DELIMITER};
