//! Compile-time build information, shown in the simulator banner.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `rankup <version> (<commit>, <date>)`
pub fn version_line() -> String {
    format!(
        "rankup {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
