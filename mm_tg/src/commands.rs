use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Inbound operator message, independent of the platform's wire types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: i64,
    pub sender_id: Option<u64>,
    pub text: String,
}

impl InboundMessage {
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self { chat_id, sender_id: None, text: text.into() }
    }
}

pub type HandlerFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Command handler; receives the owning service and the raw inbound message
pub type CommandHandler<S> = Arc<dyn Fn(Arc<S>, InboundMessage) -> HandlerFuture + Send + Sync>;

struct CommandEntry<S> {
    name: String,
    pattern: String,
    handler: CommandHandler<S>,
}

/// Ordered command table
///
/// Names are not deduplicated. A message matches every entry whose pattern
/// (`/` followed by the name) occurs anywhere in its text, so `/help` also
/// matches a command registered as `hel`.
pub struct CommandRegistry<S> {
    entries: Vec<CommandEntry<S>>,
}

impl<S: 'static> CommandRegistry<S> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register<F, Fut>(&mut self, name: &str, handler: F)
    where
        F: Fn(Arc<S>, InboundMessage) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: CommandHandler<S> =
            Arc::new(move |service: Arc<S>, message: InboundMessage| -> HandlerFuture { Box::pin(handler(service, message)) });
        self.entries.push(CommandEntry { name: name.to_string(), pattern: format!("/{name}"), handler });
    }

    /// Handlers matching `text`, in registration order
    pub fn matching(&self, text: &str) -> Vec<CommandHandler<S>> {
        self.entries.iter().filter(|entry| text.contains(&entry.pattern)).map(|entry| entry.handler.clone()).collect()
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }
}

impl<S: 'static> Default for CommandRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
