use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while loading and presenting a race session.
///
/// Line-level problems inside an input file are not errors: parsers record
/// them as [`crate::models::SkippedLine`]s and keep going.
#[derive(Error, Debug)]
pub enum RaceError {
    /// An input path does not exist.
    #[error("Oops! The file '{}' doesn't exist.", .0.display())]
    MissingFile(PathBuf),

    /// The race log has no lines at all, so there is not even a race name.
    #[error("Race log {} is empty", .0.display())]
    EmptyRaceLog(PathBuf),

    /// A file exists but could not be read.
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Convenience alias used throughout the lap-times crates.
pub type Result<T> = std::result::Result<T, RaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_file() {
        let err = RaceError::MissingFile(PathBuf::from("race.txt"));
        assert_eq!(err.to_string(), "Oops! The file 'race.txt' doesn't exist.");
    }

    #[test]
    fn test_error_display_empty_race_log() {
        let err = RaceError::EmptyRaceLog(PathBuf::from("/data/monaco.txt"));
        assert_eq!(err.to_string(), "Race log /data/monaco.txt is empty");
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let err = RaceError::FileRead {
            path: PathBuf::from("/some/drivers.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/drivers.txt"));
        assert!(msg.contains("valid UTF-8"));
    }

    #[test]
    fn test_error_display_terminal() {
        let err = RaceError::Terminal("crossterm failure".to_string());
        assert_eq!(err.to_string(), "Terminal error: crossterm failure");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RaceError = json_err.into();
        assert!(matches!(err, RaceError::JsonSerialize(_)));
        assert!(err.to_string().starts_with("Failed to serialize report:"));
    }
}
