//! Error taxonomy and process exit-code mapping.

use crate::domain::validation::AmountViolation;

/// Top-level error type for ratequote.
#[derive(Debug, thiserror::Error)]
pub enum RatequoteError {
    #[error("market file error: {reason}")]
    Market { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Violation(#[from] AmountViolation),

    /// Contract violation: unreachable while validation runs before
    /// pricing, since feasibility implies at least one selectable lender.
    #[error("average rate requested over an empty lender selection")]
    EmptyRateAverage,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&RatequoteError> for std::process::ExitCode {
    fn from(err: &RatequoteError) -> Self {
        let code: u8 = match err {
            RatequoteError::Io(_) => 1,
            RatequoteError::ConfigParse { .. }
            | RatequoteError::ConfigMissing { .. }
            | RatequoteError::ConfigInvalid { .. } => 2,
            RatequoteError::Market { .. } => 3,
            RatequoteError::Violation(_) => 4,
            RatequoteError::EmptyRateAverage => 5,
        };
        std::process::ExitCode::from(code)
    }
}
