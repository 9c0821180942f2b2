pub mod scenarios;

// Re-export commonly used items
pub use scenarios::{scenarios, Scenario};

/// Check if running in CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
}

/// Number of proptest cases to run, raised on CI.
pub fn proptest_cases() -> u32 {
    if is_ci() {
        1024
    } else {
        256
    }
}
