pub const CROSSCHECK_CMD: &str = "crosscheck";
pub const WARNING_ANNOTATION: &str = "Warning, you should check this target!!";
pub const NON_WARNING_ANNOTATION: &str = "Non warning, good target!!";
