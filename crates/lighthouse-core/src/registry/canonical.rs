//! Canonical cross-cutting errors every registry is seeded with.

use lighthouse_core_types::lang;

use crate::level::Level;
use crate::model::{Identity, Sample, SpError};

/// Well-known errors served by every [`Registry`](super::Registry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Canonical {
    /// Fallback whenever nothing more specific may be disclosed
    Internal,
    NotFound,
    BadRequest,
    Unauthorized,
    Forbidden,
    Timeout,
}

impl Canonical {
    pub const ALL: [Canonical; 6] = [
        Canonical::Internal,
        Canonical::NotFound,
        Canonical::BadRequest,
        Canonical::Unauthorized,
        Canonical::Forbidden,
        Canonical::Timeout,
    ];

    /// Content of the canonical error
    pub fn sample(self) -> Sample {
        let (en, ru, description, hint, http_code) = match self {
            Canonical::Internal => (
                "Internal server error",
                "Ошибка сервера",
                "Internal server error. We are sorry for the inconvenience",
                "Please try again later - we are working on it",
                500,
            ),
            Canonical::NotFound => (
                "Resource not found",
                "Ресурс не найден",
                "The requested resource could not be found on this server",
                "Please check the URL and try again",
                404,
            ),
            Canonical::BadRequest => (
                "Bad request",
                "Неверный запрос",
                "The request could not be understood by the server due to malformed syntax",
                "Please check your request parameters and try again",
                400,
            ),
            Canonical::Unauthorized => (
                "Unauthorized",
                "Не авторизован",
                "Authentication is required and has failed or has not been provided",
                "Please provide valid authentication credentials",
                401,
            ),
            Canonical::Forbidden => (
                "Forbidden",
                "Доступ запрещен",
                "You don't have permission to access this resource",
                "Please contact your administrator if you need access",
                403,
            ),
            Canonical::Timeout => (
                "Request timeout",
                "Время ожидания истекло",
                "The server timed out waiting for the request",
                "Please try again. If the problem persists, contact support",
                408,
            ),
        };

        Sample::new(description)
            .with_message(lang::EN, en)
            .with_message(lang::RU, ru)
            .with_hint(hint)
            .with_http_code(http_code)
            .with_level(Level::LowUser)
    }

    /// Identity of the canonical error, stable across processes
    pub fn identity(self) -> Identity {
        self.sample().identity()
    }

    pub(crate) fn build(self, source: String) -> SpError {
        SpError::build(self.sample(), source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_samples_are_valid() {
        for kind in Canonical::ALL {
            assert!(kind.sample().validate().is_ok(), "{:?}", kind);
        }
    }

    #[test]
    fn test_canonical_identities_are_distinct() {
        let ids: HashSet<_> = Canonical::ALL.iter().map(|k| k.identity()).collect();
        assert_eq!(ids.len(), Canonical::ALL.len());
    }

    #[test]
    fn test_canonical_errors_are_user_safe() {
        for kind in Canonical::ALL {
            assert_eq!(kind.sample().level, Level::LowUser);
        }
    }
}
