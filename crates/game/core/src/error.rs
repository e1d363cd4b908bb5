//! Shared error infrastructure for fight-core.
//!
//! Runtime combat outcomes (illegal phase, terminal combatant, bad parameters)
//! are *data* carried inside [`FightResult`](crate::FightResult) and never
//! surface as `Err`. The types here cover the other half: contract violations
//! detected while building configuration, combatants or actions.
//!
//! Every error type implements [`GameError`] so callers can classify failures
//! uniformly by severity and stable error code.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the caller may retry with different input.
    ///
    /// Examples: acting out of turn, using an item that is not held.
    Recoverable,

    /// Invalid input that should be corrected before retrying.
    ///
    /// Examples: unknown item id, attacking oneself.
    Validation,

    /// Configuration bug detected at construction time.
    ///
    /// Examples: action legal in zero phases, block divisor of zero.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }
}

/// Common trait for all fight-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the `Display`/`Error` impl
/// - Classify severity by recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable across releases; used for logging and assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Construction-time contract violations.
///
/// These indicate a configuration bug rather than a runtime condition, so
/// they are reported once when the offending value is built and never while
/// resolving actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// An action variant declares no phase in which it is legal.
    #[error("action `{action}` is legal in zero game phases")]
    EmptyAcceptablePhases { action: &'static str },

    /// Maximum health must be positive.
    #[error("maximum health must be greater than zero")]
    ZeroMaxHealth,

    /// Block divisor would divide by zero.
    #[error("block divisor must be at least 1")]
    ZeroBlockDivisor,

    /// A percentage outside `0..=100`.
    #[error("{field} must be within 0..=100 (got {value})")]
    InvalidPercent { field: &'static str, value: u32 },

    /// Starting health above the configured maximum.
    #[error("starting health {current} exceeds maximum {maximum}")]
    HealthAboveMaximum { current: u32, maximum: u32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            EmptyAcceptablePhases { .. } => "CONFIG_EMPTY_ACCEPTABLE_PHASES",
            ZeroMaxHealth => "CONFIG_ZERO_MAX_HEALTH",
            ZeroBlockDivisor => "CONFIG_ZERO_BLOCK_DIVISOR",
            InvalidPercent { .. } => "CONFIG_INVALID_PERCENT",
            HealthAboveMaximum { .. } => "CONFIG_HEALTH_ABOVE_MAXIMUM",
        }
    }
}
