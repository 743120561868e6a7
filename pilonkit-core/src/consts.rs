pub const COMMENT_MARKER: char = '#';
pub const MISSING_VALUE: &str = "NA";
pub const INSERTION_REF_SENTINEL: &str = ".";
pub const DELETION_MARKER: char = '-';
