use crate::domain::exclusion::ExclusionSet;
use crate::domain::phone::is_valid_phone_number;

pub const COLUMN_DELIMITER: char = ',';

pub fn split_columns(row: &str) -> impl Iterator<Item = &str> {
    row.split(COLUMN_DELIMITER)
}

/// A first line counts as a header when any of its cells does not look like a
/// phone number. Data rows carrying a malformed number are misread as headers
/// too and therefore pass through unfiltered.
pub fn is_header_row(row: &str) -> bool {
    split_columns(row).any(|cell| !is_valid_phone_number(cell))
}

/// A row is dropped as a whole as soon as one of its cells is a listed number.
pub fn row_is_excluded(row: &str, exclusions: &ExclusionSet) -> bool {
    split_columns(row).any(|cell| exclusions.matches_token(cell))
}
