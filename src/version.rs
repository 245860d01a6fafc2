//! Version banner for `--version`.

use chrono::NaiveDateTime;

/// Layout of the build stamp written by `build.rs`, without the zone suffix.
const STAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// Layout of the rendered build time.
const DISPLAY_FORMAT: &str = "%d.%m.%Y - %H:%M:%S";

/// Build identity of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Application name.
    pub app_name: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Raw build stamp, e.g. `2024-05-01_13:45:10_UTC`.
    pub build_timestamp: &'static str,
}

impl VersionInfo {
    /// Identity of this build.
    pub fn current() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            build_timestamp: option_env!("TUI_TICTACTOE_BUILD_TIMESTAMP")
                .unwrap_or("<unknown build timestamp>"),
        }
    }

    /// `"<app> - version <version> built on <time>"`.
    pub fn banner(&self) -> String {
        format!(
            "{} - version {} built on {}",
            self.app_name,
            self.version,
            format_build_timestamp(self.build_timestamp)
        )
    }
}

/// Renders `YYYY-MM-DD_HH:MM:SS_ZONE` as `DD.MM.YYYY - HH:MM:SS ZONE`.
///
/// Anything that does not parse is returned as is.
pub fn format_build_timestamp(raw: &str) -> String {
    let Some((stamp, zone)) = raw.rsplit_once('_') else {
        return raw.to_string();
    };
    match NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT) {
        Ok(time) if !zone.is_empty() => format!("{} {}", time.format(DISPLAY_FORMAT), zone),
        _ => raw.to_string(),
    }
}
