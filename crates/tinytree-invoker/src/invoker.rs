//! Frontend execution under the fixed three-argument contract

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitStatus;

use tokio::process::Command;

use crate::{InvokeError, ParserCapability, Result};

/// Submission-time flag selecting how much work the frontend does.
///
/// Not document state: it is a per-invocation parameter and is never
/// persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    SyntaxOnly,
    Full,
}

impl ParseMode {
    /// The boolean literal passed as the frontend's third argument.
    pub fn full_flag(self) -> &'static str {
        match self {
            ParseMode::Full => "true",
            ParseMode::SyntaxOnly => "false",
        }
    }
}

/// Runs the external frontend against the workspace document pair.
///
/// The contract is fixed: `frontend <inputPath> <outputPath> <fullMode>`.
/// The frontend reads program text from the input path and writes a JSON
/// tree to the output path.
pub struct ParserInvoker {
    capability: ParserCapability,
    input_path: PathBuf,
    output_path: PathBuf,
}

impl ParserInvoker {
    pub fn new(capability: ParserCapability, input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            capability,
            input_path,
            output_path,
        }
    }

    pub fn capability(&self) -> &ParserCapability {
        &self.capability
    }

    /// The positional argument list for one invocation.
    fn invocation_args(&self, mode: ParseMode) -> [OsString; 3] {
        [
            self.input_path.clone().into_os_string(),
            self.output_path.clone().into_os_string(),
            OsString::from(mode.full_flag()),
        ]
    }

    /// Run the frontend to completion.
    ///
    /// On a host without a usable frontend this returns immediately with
    /// `UnsupportedPlatform`; it never attempts a spawn that could hang or
    /// take the server down. A frontend that launches but exits non-zero is
    /// reported as `ParserFailure`, distinct from a failed launch.
    pub async fn invoke(&self, mode: ParseMode) -> Result<ExitStatus> {
        let bin = match &self.capability {
            ParserCapability::Available(path) => path,
            ParserCapability::Unavailable { reason } => {
                return Err(InvokeError::UnsupportedPlatform {
                    reason: reason.clone(),
                })
            }
        };

        let status = Command::new(bin)
            .args(self.invocation_args(mode))
            .status()
            .await
            .map_err(InvokeError::Spawn)?;

        if !status.success() {
            return Err(InvokeError::ParserFailure { status });
        }
        Ok(status)
    }
}
