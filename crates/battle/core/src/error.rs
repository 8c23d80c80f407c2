//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g., `ArtifactError`, `BattleError`) are defined in
//! their respective modules alongside the operations they validate. This module
//! only provides the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each module has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Synchronous**: Every error is surfaced to the caller, never recovered internally

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller can retry with a different command
/// - **Validation**: Invalid input that should be rejected without retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with an alternative command.
    ///
    /// Examples: attacking a unit that already fell
    Recoverable,

    /// Validation error - invalid input or data, should not retry without changes.
    ///
    /// Examples: non-primary artifact, unsupported effect mode
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
