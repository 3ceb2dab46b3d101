//! Startup capability detection for the external frontend

use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the bundled frontend on the platform it ships for.
pub const BUNDLED_FRONTEND: &str = "tiny_parser.exe";

/// Whether a frontend executable is usable on this host.
///
/// Resolved once at startup and threaded into the invoker as configuration,
/// so no request-time code branches on platform strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserCapability {
    Available(PathBuf),
    Unavailable { reason: String },
}

impl ParserCapability {
    /// Resolve the frontend for this host.
    ///
    /// An explicitly configured binary wins on any platform; without one,
    /// only the Windows family has the bundled `tiny_parser.exe`.
    pub fn detect(parser_bin: Option<&Path>) -> Self {
        match parser_bin {
            Some(path) if path.is_file() => Self::Available(path.to_path_buf()),
            Some(path) => Self::Unavailable {
                reason: format!("no parser binary at {}", path.display()),
            },
            None if cfg!(windows) => Self::Available(PathBuf::from(BUNDLED_FRONTEND)),
            None => Self::Unavailable {
                reason: format!(
                    "the bundled frontend only ships for Windows (host is {})",
                    std::env::consts::OS
                ),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl fmt::Display for ParserCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(path) => write!(f, "available ({})", path.display()),
            Self::Unavailable { reason } => write!(f, "unavailable: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_existing_binary_is_available_on_any_host() {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("frontend");
        fs::write(&bin, "").unwrap();

        let cap = ParserCapability::detect(Some(&bin));
        assert_eq!(cap, ParserCapability::Available(bin));
    }

    #[test]
    fn explicit_missing_binary_is_unavailable() {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("does-not-exist");

        let cap = ParserCapability::detect(Some(&bin));
        assert!(!cap.is_available());
    }

    #[cfg(not(windows))]
    #[test]
    fn bundled_frontend_is_unavailable_off_windows() {
        let cap = ParserCapability::detect(None);
        assert!(!cap.is_available());
    }

    #[cfg(windows)]
    #[test]
    fn bundled_frontend_is_available_on_windows() {
        let cap = ParserCapability::detect(None);
        assert!(cap.is_available());
    }
}
