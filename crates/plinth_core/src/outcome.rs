//! Use-case outcomes
//!
//! Use-cases never return `Err`. A guard rejection or a failed handler is a
//! [`Outcome::Failure`] that still carries the entity the caller should keep,
//! which may be the original (rollback) or the transitioned one.

/// Result of a use-case: the entity to keep plus metadata or an error message
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T, M = ()> {
    /// The action completed
    Success { updated: T, meta: M },
    /// The action failed; `updated` is still the state to keep
    Failure { updated: T, error: String },
}

impl<T> Outcome<T, ()> {
    /// Success without metadata
    pub fn success(updated: T) -> Self {
        Outcome::Success { updated, meta: () }
    }
}

impl<T, M> Outcome<T, M> {
    /// Success with metadata
    pub fn success_with(updated: T, meta: M) -> Self {
        Outcome::Success { updated, meta }
    }

    /// Failure carrying the entity to keep
    pub fn failure(updated: T, error: impl Into<String>) -> Self {
        Outcome::Failure {
            updated,
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The entity to keep, regardless of success
    pub fn updated(&self) -> &T {
        match self {
            Outcome::Success { updated, .. } | Outcome::Failure { updated, .. } => updated,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }

    pub fn meta(&self) -> Option<&M> {
        match self {
            Outcome::Success { meta, .. } => Some(meta),
            Outcome::Failure { .. } => None,
        }
    }

    /// Split into the entity to keep and the action result
    pub fn into_result(self) -> (T, Result<M, String>) {
        match self {
            Outcome::Success { updated, meta } => (updated, Ok(meta)),
            Outcome::Failure { updated, error } => (updated, Err(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome = Outcome::success_with("entity", 3u8);
        assert!(outcome.is_success());
        assert_eq!(*outcome.updated(), "entity");
        assert_eq!(outcome.meta(), Some(&3));
        assert_eq!(outcome.error(), None);
    }

    #[test]
    fn test_failure_keeps_entity() {
        let outcome: Outcome<&str> = Outcome::failure("original", "Button is not interactive");
        assert!(!outcome.is_success());
        assert_eq!(outcome.error(), Some("Button is not interactive"));

        let (kept, result) = outcome.into_result();
        assert_eq!(kept, "original");
        assert_eq!(result, Err("Button is not interactive".to_string()));
    }
}
