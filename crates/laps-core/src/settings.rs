use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Lap-time statistics for a single race
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lap-times",
    about = "Lap-time statistics for a single race",
    version
)]
pub struct Settings {
    /// Race log: race name on the first line, then one `CODE<seconds>` lap per line
    #[arg(long, env = "LAP_TIMES_RACE_FILE")]
    pub race_file: Option<PathBuf>,

    /// Driver roster: `CODE: Name, Team, Nationality, #Number` per line
    #[arg(long, env = "LAP_TIMES_DRIVERS_FILE")]
    pub drivers_file: Option<PathBuf>,

    /// View mode
    #[arg(long, default_value = "menu", value_parser = ["menu", "summary", "json"])]
    pub view: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// Apply flags that override other values.
    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// `true` when the interactive menu should run.
    pub fn is_interactive(&self) -> bool {
        self.view == "menu"
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["lap-times"]);

        assert_eq!(settings.view, "menu");
        assert_eq!(settings.theme, "auto");
        assert_eq!(settings.log_level, "INFO");
        assert!(settings.log_file.is_none());
        assert!(!settings.debug);
        assert!(settings.is_interactive());
    }

    #[test]
    fn test_settings_cli_file_paths() {
        let settings = Settings::parse_from([
            "lap-times",
            "--race-file",
            "monaco.txt",
            "--drivers-file",
            "drivers.txt",
        ]);
        assert_eq!(settings.race_file, Some(PathBuf::from("monaco.txt")));
        assert_eq!(settings.drivers_file, Some(PathBuf::from("drivers.txt")));
    }

    #[test]
    fn test_settings_cli_summary_view_is_not_interactive() {
        let settings = Settings::parse_from(["lap-times", "--view", "summary"]);
        assert_eq!(settings.view, "summary");
        assert!(!settings.is_interactive());
    }

    #[test]
    fn test_settings_rejects_unknown_view() {
        let result = Settings::try_parse_from(["lap-times", "--view", "chart"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_cli_log_file() {
        let settings = Settings::parse_from(["lap-times", "--log-file", "/tmp/laps.log"]);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/laps.log")));
    }

    #[test]
    fn test_load_from_args_debug_overrides_log_level() {
        let settings = Settings::load_from_args(["lap-times", "--log-level", "ERROR", "--debug"]);
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_load_from_args_keeps_explicit_log_level() {
        let settings = Settings::load_from_args(["lap-times", "--log-level", "WARNING"]);
        assert_eq!(settings.log_level, "WARNING");
    }
}
