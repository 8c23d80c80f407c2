use super::{ApplyingMode, ArtifactCategory};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised when an artifact is applied to a creature.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact '{name}' is {category}, only primary artifacts can be applied")]
    InvalidArtifact {
        name: String,
        category: ArtifactCategory,
    },

    #[error("unsupported effect mode '{mode}', use multiply or add")]
    UnsupportedEffectMode { mode: ApplyingMode },
}

impl GameError for ArtifactError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArtifact { .. } => "ARTIFACT_INVALID",
            Self::UnsupportedEffectMode { .. } => "ARTIFACT_UNSUPPORTED_MODE",
        }
    }
}
