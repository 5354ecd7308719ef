// src/constants.rs

/// Permission bits applied to every file written into the target tree (Unix only).
pub const TARGET_FILE_MODE: u32 = 0o664;

/// Placeholder syntax used when a bare key/value table is passed to `using`.
pub const DEFAULT_SYNTAX_NAME: &str = "maven";

/// Header printed before the plan listing of a dry run.
pub const DRY_RUN_HEADER: &str = "--- Dry Run: Files that would be copied ---";

/// Footer printed after the plan listing of a dry run.
pub const DRY_RUN_FOOTER: &str = "--- End Dry Run ---";
