//! Error handling utilities for the mooddiary application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! The diary core itself never fails: empty stores produce explicit empty-state
//! results instead of errors. `AppError` only covers the ambient layer around it,
//! namely configuration and the terminal streams the session talks to.

use thiserror::Error;

/// Represents all possible errors that can occur in the mooddiary application.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use mooddiary::errors::AppError;
///
/// let error = AppError::Config("Unknown log format".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Unknown log format");
/// ```
///
/// Converting from an IO error:
/// ```
/// use mooddiary::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::BrokenPipe, "broken pipe");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::BrokenPipe),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from reading commands or writing session output.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use mooddiary::errors::{AppError, AppResult};
///
/// fn parse_seed(raw: &str) -> AppResult<u64> {
///     raw.parse()
///         .map_err(|_| AppError::Config(format!("Invalid seed: {}", raw)))
/// }
///
/// assert!(parse_seed("42").is_ok());
/// assert!(parse_seed("forty-two").is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;
