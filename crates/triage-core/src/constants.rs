/// Triage engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of causes returned by a single diagnosis.
pub const DEFAULT_TOP_K: usize = 3;

/// Minimum confidence a cause must reach to be reported when the threshold is enforced.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.4;

/// Tolerance used when comparing certainty values produced by different fold orders.
pub const CERTAINTY_EPSILON: f64 = 1e-9;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "TRIAGE_LOG";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "triage.toml";
