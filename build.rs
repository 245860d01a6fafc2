//! Stamps the binary with its build time for `--version`.

const STAMP_VAR: &str = "TUI_TICTACTOE_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-env-changed={STAMP_VAR}");

    // An externally supplied stamp (release pipelines) wins over the local clock.
    let stamp = std::env::var(STAMP_VAR)
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d_%H:%M:%S_UTC").to_string());

    println!("cargo:rustc-env={STAMP_VAR}={stamp}");
}
