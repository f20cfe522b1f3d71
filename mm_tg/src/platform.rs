use std::future::Future;
use std::pin::Pin;

use crate::error_handling::Result;

/// Boxed future returned by platform calls
pub type PlatformFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// How the platform should interpret message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    #[default]
    Html,
    MarkdownV2,
    Plain,
}

/// Outbound side of a bot messaging platform
pub trait MessagePlatform: Send + Sync + 'static {
    /// Deliver one message to `chat_id`
    fn send_message<'a>(&'a self, chat_id: &'a str, text: &'a str, mode: TextMode) -> PlatformFuture<'a, ()>;
}

/// Builds a platform client from a bot token
///
/// The returned client must already have completed whatever handshake the
/// platform requires; a failure here disables notifications for good.
pub trait PlatformConnector {
    type Platform: MessagePlatform;

    fn connect<'a>(&'a self, bot_token: &'a str) -> PlatformFuture<'a, Self::Platform>;
}
