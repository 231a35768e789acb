//! Path resolution error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

/// Errors raised while computing or preparing the canonical directories
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum PathError {
    #[error("the absolute path to {path} could not be obtained: {message}")]
    HomeUnresolvable { path: String, message: String },

    #[error("failed to create data path {path}: {cause}")]
    DataDirCreateFailed { path: String, cause: String },

    #[error("unknown path category: {name}")]
    UnknownCategory { name: String },
}

impl UserFacingError for PathError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::HomeUnresolvable { .. } => {
                Some("Set the home path explicitly with --path.home or in the [path] table.")
            }
            Self::DataDirCreateFailed { .. } => {
                Some("Ensure the data path is writable or point --path.data elsewhere.")
            }
            Self::UnknownCategory { .. } => Some("Use one of: home, config, data, logs."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::HomeUnresolvable { .. } => "path.home_unresolvable",
            Self::DataDirCreateFailed { .. } => "path.data_dir_create_failed",
            Self::UnknownCategory { .. } => "path.unknown_category",
        })
    }
}
