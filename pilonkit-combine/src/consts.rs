pub const COMBINE_CMD: &str = "combine";

pub const COVERAGE_FILE_NAME: &str = "tempcoverage.txt";
pub const STATS_FILE_NAME: &str = "stats.txt";

pub const REPORT_HEADER: &str = "Chromosome\tPosition\tChange\tIllumina_cov\tIllumina_Indel_fraction\tPacBio_cov\tPacBio_Indel_fraction\tHomopolymer\tType\tLength";
pub const COVERAGE_HEADER: &str = "Chromosome\tPosition\tCoverage\tIndel_fraction\tPlatform";

pub const TRACK_MARKER: &str = "track type";
pub const VARIABLE_STEP_MARKER: &str = "variableStep";
pub const CHROM_ATTRIBUTE: &str = "chrom=";

pub const INDEL_MIN_COLUMNS: usize = 9;
pub const INDEL_CHANGE_COLUMN: usize = 8;
