//! Error types for the AudioCW core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for AudioCW operations.
pub type CwResult<T> = Result<T, CwError>;

/// Errors that can occur while synthesizing or committing audio.
///
/// Encoding never fails: unsupported characters are skipped by design, so
/// only parameter validity and sink availability are failure conditions.
#[derive(Debug, Error)]
pub enum CwError {
    /// Keying speed must be a positive number of words per minute.
    #[error("invalid keying speed: {wpm} wpm")]
    InvalidWpm {
        /// The rejected speed.
        wpm: u32,
    },

    /// Tone frequency must be positive and finite.
    #[error("invalid tone frequency: {freq} Hz")]
    InvalidFrequency {
        /// The rejected frequency.
        freq: f64,
    },

    /// The output destination could not be opened for writing.
    #[error("cannot open output sink {}: {source}", path.display())]
    SinkUnavailable {
        /// The sink that failed to open.
        path: PathBuf,
        /// The underlying open error.
        source: io::Error,
    },

    /// I/O error while writing an already-open sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_errors_are_distinct() {
        let wpm = CwError::InvalidWpm { wpm: 0 };
        let freq = CwError::InvalidFrequency { freq: -5.0 };
        assert!(wpm.to_string().contains("0 wpm"));
        assert!(freq.to_string().contains("-5 Hz"));
    }

    #[test]
    fn test_sink_unavailable_names_the_path() {
        let err = CwError::SinkUnavailable {
            path: PathBuf::from("/nope/out.wav"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(err.to_string().contains("/nope/out.wav"));
    }
}
