use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresentError {
    #[error("Invalid argument `{field}`: {reason}")]
    UsageError { field: String, reason: String },

    #[error("Could not find file: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Command `{command}` failed with {status}")]
    ExternalCommandError { command: String, status: String },

    #[error("Command `{command}` could not be started: {source}")]
    SpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    CopyError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Interrupted while serving slides")]
    Interrupted,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Input,
    Filesystem,
    Converter,
    Interrupt,
}

impl PresentError {
    pub fn usage(field: &str, reason: impl Into<String>) -> Self {
        PresentError::UsageError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        PresentError::FileNotFound { path: path.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PresentError::UsageError { .. } => ErrorCategory::Usage,
            PresentError::FileNotFound { .. } => ErrorCategory::Input,
            PresentError::CopyError { .. } | PresentError::IoError(_) => ErrorCategory::Filesystem,
            PresentError::ExternalCommandError { .. } | PresentError::SpawnError { .. } => {
                ErrorCategory::Converter
            }
            PresentError::Interrupted => ErrorCategory::Interrupt,
        }
    }

    /// 程式結束碼，與 clap 的參數錯誤 (2) 一致
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 2,
            ErrorCategory::Interrupt => 130,
            ErrorCategory::Input | ErrorCategory::Filesystem | ErrorCategory::Converter => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PresentError::UsageError { field, .. } => {
                format!("Check the value passed for `{}`; see --help", field)
            }
            PresentError::FileNotFound { path } => format!(
                "Make sure {} exists and the path is relative to the current directory",
                path.display()
            ),
            PresentError::ExternalCommandError { .. } => {
                "Inspect the converter output above; run it by hand inside the slides folder to reproduce"
                    .to_string()
            }
            PresentError::SpawnError { .. } => {
                "Install Jupyter (`pip install nbconvert`) or point --converter at an available command"
                    .to_string()
            }
            PresentError::CopyError { .. } | PresentError::IoError(_) => {
                "Check permissions and free space in the temp directory".to_string()
            }
            PresentError::Interrupted => "Nothing to do; the staging folder was removed".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PresentError::UsageError { field, reason } => {
                format!("Invalid value for `{}`: {}", field, reason)
            }
            PresentError::FileNotFound { path } => {
                format!("Could not find file {}", path.display())
            }
            PresentError::ExternalCommandError { status, .. } => {
                format!("The slide converter stopped with {}", status)
            }
            PresentError::SpawnError { command, .. } => {
                format!("Could not start the slide converter `{}`", command)
            }
            PresentError::CopyError { from, .. } => {
                format!("Could not stage {}", from.display())
            }
            PresentError::IoError(e) => format!("Filesystem error: {}", e),
            PresentError::Interrupted => "Presentation stopped".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PresentError>;
