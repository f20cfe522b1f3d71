use teloxide::ApiError;
use teloxide::RequestError;

/// Errors raised at the messaging platform boundary
///
/// None of these ever leave the notification service: construction folds them
/// into the disabled state and delivery failures go through
/// [`log_delivery_failure`].
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Telegram request failed: {0}")]
    Request(#[from] RequestError),

    #[error("Platform handshake failed: {0}")]
    Handshake(String),

    #[error("Message rejected: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, NotifyError>;

/// Log a failed delivery and drop it
pub fn log_delivery_failure(err: &NotifyError) {
    match err {
        NotifyError::Request(RequestError::RetryAfter(seconds)) => {
            tracing::warn!("Rate limited by Telegram, message dropped (retry after {seconds:?})");
        }
        NotifyError::Request(RequestError::Api(ApiError::BotBlocked)) => {
            tracing::warn!("Bot was blocked by the destination chat, message dropped");
        }
        NotifyError::Request(RequestError::Api(ApiError::ChatNotFound)) => {
            tracing::warn!("Destination chat not found, message dropped");
        }
        NotifyError::Request(RequestError::Network(net_err)) => {
            tracing::error!("Network error sending Telegram message: {net_err}");
        }
        err => {
            tracing::error!("Failed to send Telegram message: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = NotifyError::Handshake("invalid token".to_string());
        assert_eq!(err.to_string(), "Platform handshake failed: invalid token");

        let err = NotifyError::Rejected("chat muted".to_string());
        assert_eq!(err.to_string(), "Message rejected: chat muted");
    }

    #[test]
    fn test_from_request_error() {
        let err: NotifyError = RequestError::Api(ApiError::BotBlocked).into();
        assert!(matches!(err, NotifyError::Request(RequestError::Api(ApiError::BotBlocked))));

        // Must not panic for any variant
        log_delivery_failure(&err);
        log_delivery_failure(&NotifyError::Rejected("x".to_string()));
    }
}
