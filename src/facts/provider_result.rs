use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Outcome of asking one provider about one project.
#[derive(Debug, Clone)]
pub enum ProviderResult<T> {
    /// The provider answered.
    Found(T),

    /// The provider was not asked: it is disabled, or the project has no identifier for it.
    Unavailable,

    /// The provider call failed or timed out.
    Error(Arc<ohno::AppError>),
}

/// Serializes as the found data, or `null` for every other outcome.
impl<T: Serialize> Serialize for ProviderResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found(data) => data.serialize(serializer),
            Self::Unavailable | Self::Error(_) => serializer.serialize_none(),
        }
    }
}

impl<T> ProviderResult<T> {
    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns a reference to the found data, if any.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            _ => None,
        }
    }

    /// Converts this result into an `Option`, returning `Some` only for `Found`.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Found(data) => Some(data),
            _ => None,
        }
    }

    /// Returns a string describing the status of this result.
    #[must_use]
    pub const fn status_str(&self) -> &'static str {
        match self {
            Self::Found(_) => "Found",
            Self::Unavailable => "Unavailable",
            Self::Error(_) => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohno::app_err;

    #[test]
    fn test_found() {
        let result = ProviderResult::Found(42);
        assert!(result.is_found());
        assert_eq!(result.as_ref(), Some(&42));
        assert_eq!(result.status_str(), "Found");
        assert_eq!(result.ok(), Some(42));
    }

    #[test]
    fn test_unavailable() {
        let result: ProviderResult<i32> = ProviderResult::Unavailable;
        assert!(!result.is_found());
        assert_eq!(result.as_ref(), None);
        assert_eq!(result.status_str(), "Unavailable");
        assert_eq!(result.ok(), None);
    }

    #[test]
    fn test_error() {
        let result: ProviderResult<i32> = ProviderResult::Error(Arc::new(app_err!("boom")));
        assert!(!result.is_found());
        assert_eq!(result.status_str(), "Error");
        assert_eq!(result.ok(), None);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&ProviderResult::Found("x")).unwrap(), r#""x""#);
        assert_eq!(serde_json::to_string(&ProviderResult::<i32>::Unavailable).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&ProviderResult::<i32>::Error(Arc::new(app_err!("boom")))).unwrap(),
            "null"
        );
    }
}
