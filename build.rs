fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Navigation debug logging is opt-in at build time
    println!("cargo:rerun-if-env-changed=PORTFOLIO_NAV_DEBUG");
    println!("cargo:rerun-if-changed=build.rs");
}
