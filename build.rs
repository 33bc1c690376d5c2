fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Short form shown in the page footer
    let build_stamp = chrono::Utc::now().format("%Y.%m").to_string();
    println!("cargo:rustc-env=BUILD_STAMP={}", build_stamp);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
