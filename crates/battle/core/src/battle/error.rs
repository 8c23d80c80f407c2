use crate::artifact::ArtifactError;
use crate::error::{ErrorSeverity, GameError};
use crate::turn::UnitId;

/// Errors surfaced by the battle controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("unit {0} does not exist")]
    UnknownUnit(UnitId),

    #[error("precondition violated: {0}")]
    PreconditionViolated(&'static str),

    #[error("artifact could not be applied: {0}")]
    Artifact(#[from] ArtifactError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownUnit(_) => ErrorSeverity::Validation,
            Self::PreconditionViolated(_) => ErrorSeverity::Recoverable,
            Self::Artifact(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownUnit(_) => "BATTLE_UNKNOWN_UNIT",
            Self::PreconditionViolated(_) => "BATTLE_PRECONDITION_VIOLATED",
            Self::Artifact(error) => error.error_code(),
        }
    }
}
