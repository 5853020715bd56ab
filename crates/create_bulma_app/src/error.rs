//! Scaffolding failures.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a scaffold run stopped.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Bad arguments, names, or prefixes given on the command line.
    #[error("{message}{}", hint_suffix(.hint))]
    Invalid {
        /// What was wrong with the input.
        message: String,
        /// Suggested fix.
        hint: Option<String>,
    },
    /// The registry or a template file cannot be used as shipped.
    #[error("{reason}{}", file_suffix(.file))]
    Template {
        /// What is wrong with the template.
        reason: String,
        /// Offending file, once known.
        file: Option<PathBuf>,
    },
    /// The project directory is already populated.
    #[error("{} is not empty (hint: pick another name or remove it)", .0.display())]
    TargetExists(PathBuf),
    /// Filesystem failure, with the path it happened on.
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        /// Step that touched the filesystem.
        action: &'static str,
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

/// Result alias for scaffolding.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_deref()
        .map(|hint| format!(" (hint: {hint})"))
        .unwrap_or_default()
}

fn file_suffix(file: &Option<PathBuf>) -> String {
    file.as_deref()
        .map(|file| format!(" in {}", file.display()))
        .unwrap_or_default()
}

impl ScaffoldError {
    /// Rejected user input.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
            hint: None,
        }
    }

    /// Unusable template content; attach the file with [`ScaffoldError::in_file`].
    pub fn template(reason: impl Into<String>) -> Self {
        Self::Template {
            reason: reason.into(),
            file: None,
        }
    }

    /// Adapter for `map_err` that records the failing step and path.
    ///
    /// ```
    /// use std::path::Path;
    /// use create_bulma_app::ScaffoldError;
    ///
    /// let path = Path::new("missing/Cargo.toml");
    /// let err = std::fs::read(path).map_err(ScaffoldError::io("read", path)).unwrap_err();
    /// assert!(err.to_string().starts_with("failed to read missing/Cargo.toml: "));
    /// ```
    pub fn io<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> Self + 'a {
        move |source| Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Adds a hint to an [`ScaffoldError::Invalid`] error; other errors pass through.
    pub fn with_hint(mut self, text: impl Into<String>) -> Self {
        if let Self::Invalid { hint, .. } = &mut self {
            *hint = Some(text.into());
        }
        self
    }

    /// Records the template file a [`ScaffoldError::Template`] error came from, unless one is
    /// already set.
    pub fn in_file(mut self, path: &Path) -> Self {
        if let Self::Template { file, .. } = &mut self {
            file.get_or_insert_with(|| path.to_path_buf());
        }
        self
    }
}
