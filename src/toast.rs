//! Toast notifications.

use backend_client::BackendError;

/// How long a toast stays up, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 5_000;
/// Toasts visible at once; older ones are dropped.
pub const TOAST_LIMIT: usize = 3;
/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Assigned by the store when shown.
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: "Success".into(),
            description: Some(description.into()),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: "Error".into(),
            description: Some(description.into()),
            variant: ToastVariant::Destructive,
        }
    }

    /// Error toast carrying the backend's message, or the fallback.
    pub fn from_error(err: &BackendError) -> Self {
        Self::error(err.user_message().unwrap_or(FALLBACK_ERROR))
    }
}

/// Append `toast`, keeping at most [`TOAST_LIMIT`] newest.
pub fn push_bounded(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > TOAST_LIMIT {
        let excess = toasts.len() - TOAST_LIMIT;
        toasts.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_uses_backend_message() {
        let err = BackendError::Api {
            endpoint: "POST tickets".into(),
            status: 400,
            message: Some("invalid input value for enum ticket_priority".into()),
            body: String::new(),
        };
        let toast = Toast::from_error(&err);
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(
            toast.description.as_deref(),
            Some("invalid input value for enum ticket_priority")
        );
    }

    #[test]
    fn test_error_without_message_uses_fallback() {
        let err = BackendError::Api {
            endpoint: "POST tickets".into(),
            status: 502,
            message: None,
            body: "Bad Gateway".into(),
        };
        assert_eq!(Toast::from_error(&err).description.as_deref(), Some(FALLBACK_ERROR));
    }

    #[test]
    fn test_oldest_toasts_drop() {
        let mut toasts = Vec::new();
        for n in 1..=5u32 {
            let mut toast = Toast::success(format!("#{n}"));
            toast.id = n;
            push_bounded(&mut toasts, toast);
        }
        let ids: Vec<u32> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }
}
