//! Diagnostic errors the registry hands back instead of failing silently.
//!
//! Their content is constant and valid, so building them never fails.

use lighthouse_core_types::{lang, schema};

use crate::errors::LighthouseError;
use crate::level::Level;
use crate::model::{Identity, Sample, SpError};

/// `reg` was called without an error
pub(crate) fn nil_node(source: String) -> SpError {
    let sample = Sample::new("Provided error is nil. This is not allowed")
        .with_message(lang::EN, "Nil error provided")
        .with_message(lang::RU, "Передана пустая ошибка")
        .with_hint("Please, check your code and provide a valid error")
        .with_http_code(400)
        .with_level(Level::Error);
    SpError::build(sample, source)
}

/// `reg` was called with a sample that fails finalization
pub(crate) fn validation_failure(
    rejected: &Sample,
    reason: LighthouseError,
    source: String,
) -> SpError {
    let sample = Sample::new(
        "Failed to create the identity of your error. It happens when you try to register \
         an error with an empty description or English message. Provided data of error in meta",
    )
    .with_message(lang::EN, "Failed to validate error")
    .with_message(lang::RU, "Ошибка в процессе валидации")
    .with_hint(
        "Please, check your fields and provide a valid description, hint and EN message for your error",
    )
    .with_http_code(400)
    .with_level(Level::Error)
    .with_cause(reason)
    .with_meta(schema::META_SPERROR, rejected.to_value());
    SpError::build(sample, source)
}

/// `get` was called with an identity nobody registered
pub(crate) fn lookup_miss(identity: &Identity, source: String) -> SpError {
    let sample = Sample::new("There is no error with the provided identity")
        .with_message(lang::EN, "No such error")
        .with_message(lang::RU, "Такой ошибки не существует")
        .with_hint("Please, check the identity or the fact of error registration")
        .with_http_code(404)
        .with_level(Level::HighDebug)
        .with_meta(schema::META_HASH, identity.as_str());
    SpError::build(sample, source)
}
