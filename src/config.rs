/// Name the demo binary reports itself under.
pub const BINARY_NAME: &str = "arith-demo";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Flag switching the binary to JSON output.
pub const JSON_FLAG: &str = "--json";
