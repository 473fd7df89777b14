//! Loan configuration validation.
//!
//! Validates the `[loan]` section before any quote runs.

use crate::domain::error::RatequoteError;
use crate::domain::terms;
use crate::ports::config_port::ConfigPort;

pub fn validate_loan_config(config: &dyn ConfigPort) -> Result<(), RatequoteError> {
    validate_increment(config)?;
    validate_minimum(config)?;
    validate_maximum(config)?;
    validate_term_months(config)?;
    Ok(())
}

fn validate_increment(config: &dyn ConfigPort) -> Result<(), RatequoteError> {
    let value = config.get_double("loan", "increment", terms::DEFAULT_INCREMENT);
    if value <= 0.0 {
        return Err(RatequoteError::ConfigInvalid {
            section: "loan".to_string(),
            key: "increment".to_string(),
            reason: "increment must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_minimum(config: &dyn ConfigPort) -> Result<(), RatequoteError> {
    let value = config.get_double("loan", "minimum", terms::DEFAULT_MINIMUM);
    if value <= 0.0 {
        return Err(RatequoteError::ConfigInvalid {
            section: "loan".to_string(),
            key: "minimum".to_string(),
            reason: "minimum must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_maximum(config: &dyn ConfigPort) -> Result<(), RatequoteError> {
    let minimum = config.get_double("loan", "minimum", terms::DEFAULT_MINIMUM);
    let maximum = config.get_double("loan", "maximum", terms::DEFAULT_MAXIMUM);
    if maximum < minimum {
        return Err(RatequoteError::ConfigInvalid {
            section: "loan".to_string(),
            key: "maximum".to_string(),
            reason: "maximum must not be below minimum".to_string(),
        });
    }
    Ok(())
}

fn validate_term_months(config: &dyn ConfigPort) -> Result<(), RatequoteError> {
    let value = config.get_int(
        "loan",
        "term_months",
        i64::from(terms::DEFAULT_TERM_MONTHS),
    );
    if value < 1 {
        return Err(RatequoteError::ConfigInvalid {
            section: "loan".to_string(),
            key: "term_months".to_string(),
            reason: "term_months must be at least 1".to_string(),
        });
    }
    Ok(())
}
