//! Shortcuts for common error shapes.
//!
//! All of them capture the caller's location as `source`.

use std::error::Error;
use std::sync::Arc;

use lighthouse_core_types::lang;

use crate::errors::Result;
use crate::level::Level;
use crate::model::{source, Cause, Sample, SpError};

pub const MSG_INTERNAL: &str = "Internal server error";
pub const MSG_NOT_FOUND: &str = "Not found";
pub const MSG_BAD_REQUEST: &str = "Bad request";
pub const MSG_UNAUTHORIZED: &str = "Unauthorized";
pub const MSG_FORBIDDEN: &str = "Forbidden";

fn user_facing(code: u16, message: &str, description: &str, hint: &str) -> Sample {
    Sample::new(description)
        .with_message(lang::EN, message)
        .with_hint(hint)
        .with_http_code(code)
        .with_level(Level::LowUser)
}

impl SpError {
    /// Turn any error into an `SpError`
    ///
    /// An `SpError` is returned unchanged. Anything else becomes an
    /// "Unknown error" layer at `Level::Error` whose description is the
    /// foreign error's message and whose cause is the foreign error itself.
    #[track_caller]
    pub fn ensure(err: Box<dyn Error + Send + Sync + 'static>) -> SpError {
        let caller = source::caller();
        match err.downcast::<SpError>() {
            Ok(sp) => *sp,
            Err(foreign) => {
                let mut description = foreign.to_string();
                if description.is_empty() {
                    description = "unknown error".to_string();
                }
                let cause: Cause = Arc::from(foreign);
                let sample = Sample::new(description)
                    .with_message(lang::EN, "Unknown error")
                    .with_hint("Inspect the wrapped error")
                    .with_level(Level::Error)
                    .with_shared_cause(cause);
                SpError::build(sample, caller)
            }
        }
    }
}

/// 500 Internal Server Error caused by `cause`
///
/// # Errors
///
/// Returns `LighthouseError::EmptyError` if `description` is empty.
#[track_caller]
pub fn internal<E>(cause: E, description: &str, hint: &str) -> Result<SpError>
where
    E: Error + Send + Sync + 'static,
{
    let sample = user_facing(500, MSG_INTERNAL, description, hint).with_cause(cause);
    SpError::finalize(sample, source::caller())
}

/// 404 Not Found
///
/// # Errors
///
/// Returns `LighthouseError::EmptyError` if `description` is empty.
#[track_caller]
pub fn not_found(description: &str, hint: &str) -> Result<SpError> {
    SpError::finalize(
        user_facing(404, MSG_NOT_FOUND, description, hint),
        source::caller(),
    )
}

/// 400 Bad Request
///
/// # Errors
///
/// Returns `LighthouseError::EmptyError` if `description` is empty.
#[track_caller]
pub fn bad_request(description: &str, hint: &str) -> Result<SpError> {
    SpError::finalize(
        user_facing(400, MSG_BAD_REQUEST, description, hint),
        source::caller(),
    )
}

/// 401 Unauthorized
///
/// # Errors
///
/// Returns `LighthouseError::EmptyError` if `description` is empty.
#[track_caller]
pub fn unauthorized(description: &str, hint: &str) -> Result<SpError> {
    SpError::finalize(
        user_facing(401, MSG_UNAUTHORIZED, description, hint),
        source::caller(),
    )
}

/// 403 Forbidden
///
/// # Errors
///
/// Returns `LighthouseError::EmptyError` if `description` is empty.
#[track_caller]
pub fn forbidden(description: &str, hint: &str) -> Result<SpError> {
    SpError::finalize(
        user_facing(403, MSG_FORBIDDEN, description, hint),
        source::caller(),
    )
}
