pub const BED_CMD: &str = "bed";
pub const BED_SUFFIX: &str = "bed";
pub const CHANGE_LINE_MIN_TOKENS: usize = 6;
pub const TOKEN_SEPARATORS: [char; 2] = [':', ' '];
pub const RANGE_SEPARATOR: char = '-';
