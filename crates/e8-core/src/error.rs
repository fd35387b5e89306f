//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared by every E8 evaluator. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Domain violations fail fast with the offending input in the message.
//!   A series evaluator never returns NaN for an out-of-domain argument.
//! - Truncation is not an error. Series results are finite approximations
//!   and are returned as such.
//! - Backend failures (constant cache initialization, non-finite results)
//!   surface as `Arithmetic` with the backend's description.

use thiserror::Error;

/// Top-level error type for E8 numerics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum E8Error {
    /// An input lies outside the domain of the requested operation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The requested working precision is unusable.
    #[error("invalid precision: {0}")]
    Precision(String),

    /// The arbitrary-precision backend failed or produced a non-finite value.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Engine configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Inputs outside the mathematical domain of an operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// σ_k(n) is only defined for n ≥ 1.
    #[error("divisor sum requires a positive argument, got {0}")]
    NonPositiveDivisorArgument(i64),

    /// Modular forms are evaluated on the upper half-plane only.
    #[error("tau = {tau} is not in the upper half-plane (Im(tau) must be > 0)")]
    TauNotInUpperHalfPlane {
        /// Decimal rendering of the rejected parameter.
        tau: String,
    },

    /// A complex division by zero (e.g. −1/τ at τ = 0).
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// The operation that attempted the division.
        context: String,
    },

    /// The complex logarithm is undefined at zero.
    #[error("logarithm of zero in {context}")]
    LogarithmOfZero {
        /// The operation that took the logarithm.
        context: String,
    },

    /// Γ has poles at the non-positive integers.
    #[error("gamma function pole at {argument}")]
    GammaPole {
        /// Decimal rendering of the pole location.
        argument: String,
    },

    /// Neither s nor 8 − s lies in the convergent half-plane Re > 8.
    #[error("s = {s} is outside the continuation range: Re(s) and Re(8 - s) are both <= 8")]
    OutsideContinuation {
        /// Decimal rendering of the rejected argument.
        s: String,
    },
}

/// Errors in engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric setting was zero or otherwise out of range.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// The offending setting.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An environment variable could not be parsed.
    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },

    /// The YAML document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(String),
}

/// Shorthand result type for E8 numerics.
pub type E8Result<T> = Result<T, E8Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts_into_top_level() {
        let err: E8Error = DomainError::NonPositiveDivisorArgument(0).into();
        assert!(matches!(
            err,
            E8Error::Domain(DomainError::NonPositiveDivisorArgument(0))
        ));
        assert_eq!(
            err.to_string(),
            "domain error: divisor sum requires a positive argument, got 0"
        );
    }

    #[test]
    fn gamma_pole_message_names_argument() {
        let err = DomainError::GammaPole {
            argument: "-2".to_string(),
        };
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::NotPositive {
            field: "precision_digits",
            value: "0".to_string(),
        };
        assert_eq!(err.to_string(), "precision_digits must be positive, got 0");
    }
}
