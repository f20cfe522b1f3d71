use std::future::Future;
use std::sync::Arc;

use mm_types::Order;
use mm_types::Position;
use mm_types::Settings;

use crate::commands::CommandRegistry;
use crate::commands::InboundMessage;
use crate::config::NotifierConfig;
use crate::error_handling::Result;
use crate::error_handling::log_delivery_failure;
use crate::format;
use crate::handlers;
use crate::platform::MessagePlatform;
use crate::platform::PlatformConnector;
use crate::platform::TextMode;

/// Why a service ended up disabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisabledReason {
    /// Flag off, or token / chat id missing
    NotConfigured,
    /// Client construction or handshake failed
    InitFailed(String),
}

struct Connection<P> {
    platform: P,
    chat_id: String,
    commands: CommandRegistry<NotificationService<P>>,
}

enum Enablement<P> {
    Disabled(DisabledReason),
    Enabled(Connection<P>),
}

/// Telegram notification side channel for the trading engine
///
/// Enablement is decided once in [`NotificationService::connect`] and never
/// changes afterwards. Every `send_*` call is fire-and-forget: when disabled it
/// does nothing, when enabled it makes exactly one delivery attempt and logs
/// any failure instead of returning it.
pub struct NotificationService<P> {
    state: Enablement<P>,
}

impl<P: MessagePlatform> NotificationService<P> {
    /// Resolve the enablement state and, when enabled, register `/start` and `/help`
    pub async fn connect<C>(config: &NotifierConfig, connector: &C) -> Self
    where
        C: PlatformConnector<Platform = P>,
    {
        if !config.wants_enabled() {
            tracing::warn!("Telegram notifications disabled (missing token or chat ID)");
            return Self::disabled(DisabledReason::NotConfigured);
        }

        // One attempt only; a failed handshake leaves the service disabled for good
        match connector.connect(&config.bot_token).await {
            Ok(platform) => {
                let mut commands = CommandRegistry::new();
                handlers::register_builtin(&mut commands);
                tracing::info!("Telegram bot initialised for chat {}", config.chat_id);
                Self { state: Enablement::Enabled(Connection { platform, chat_id: config.chat_id.clone(), commands }) }
            }
            Err(err) => {
                tracing::error!("Failed to initialise Telegram bot: {err}");
                Self::disabled(DisabledReason::InitFailed(err.to_string()))
            }
        }
    }

    pub fn disabled(reason: DisabledReason) -> Self {
        Self { state: Enablement::Disabled(reason) }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.state, Enablement::Enabled(_))
    }

    pub fn disabled_reason(&self) -> Option<&DisabledReason> {
        match &self.state {
            Enablement::Disabled(reason) => Some(reason),
            Enablement::Enabled(_) => None,
        }
    }

    /// Underlying platform client, for callers that need direct access
    pub fn platform(&self) -> Option<&P> {
        match &self.state {
            Enablement::Enabled(connection) => Some(&connection.platform),
            Enablement::Disabled(_) => None,
        }
    }

    /// Registered command names in registration order (empty when disabled)
    pub fn commands(&self) -> Vec<&str> {
        match &self.state {
            Enablement::Enabled(connection) => connection.commands.names(),
            Enablement::Disabled(_) => Vec::new(),
        }
    }

    /// Add a command handler; ignored when disabled
    pub fn register_command<F, Fut>(&mut self, command: &str, handler: F)
    where
        F: Fn(Arc<Self>, InboundMessage) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        match &mut self.state {
            Enablement::Enabled(connection) => {
                connection.commands.register(command, handler);
                tracing::debug!("Registered /{command} handler");
            }
            Enablement::Disabled(_) => {
                tracing::debug!("Ignoring /{command} registration, notifications disabled");
            }
        }
    }

    /// Run every handler whose pattern occurs in the message, in registration order
    ///
    /// Returns the number of handlers run. The sender is not checked against
    /// the configured chat.
    pub async fn dispatch(self: Arc<Self>, message: InboundMessage) -> usize {
        // Handlers are cloned out of the registry so each one can take its own `Arc` of the service
        let handlers = match &self.state {
            Enablement::Enabled(connection) => connection.commands.matching(&message.text),
            Enablement::Disabled(_) => return 0,
        };

        tracing::debug!(
            "Dispatching {:?} from chat {} (sender {:?}) to {} handler(s)",
            message.text,
            message.chat_id,
            message.sender_id,
            handlers.len()
        );

        // Sequential: a handler's replies land before the next handler starts
        for handler in &handlers {
            handler(self.clone(), message.clone()).await;
        }
        handlers.len()
    }

    /// Single delivery attempt to the configured chat
    async fn deliver(connection: &Connection<P>, text: &str, mode: TextMode) -> Result<()> {
        connection.platform.send_message(&connection.chat_id, text, mode).await
    }

    pub async fn send_message(&self, text: &str, mode: TextMode) {
        let Enablement::Enabled(connection) = &self.state else {
            tracing::trace!("Notification suppressed, service disabled");
            return;
        };

        // Failures stop here; callers never see them
        if let Err(err) = Self::deliver(connection, text, mode).await {
            log_delivery_failure(&err);
        }
    }

    async fn send_html(&self, text: String) {
        self.send_message(&text, TextMode::Html).await;
    }

    pub async fn send_notification(&self, title: &str, message: &str, marker: &str) {
        self.send_html(format::notification(title, message, marker)).await;
    }

    pub async fn send_status(&self, settings: &Settings, position: Option<&Position>, active_orders: usize, running: bool) {
        self.send_html(format::status(settings, position, active_orders, running)).await;
    }

    pub async fn send_position_update(&self, position: Option<&Position>) {
        self.send_html(format::position_update(position)).await;
    }

    pub async fn send_order_placed(&self, order: &Order) {
        self.send_html(format::order_placed(order)).await;
    }

    pub async fn send_order_filled(&self, order: &Order, fill_price: f64) {
        self.send_html(format::order_filled(order, fill_price)).await;
    }

    pub async fn send_order_cancelled(&self, order_id: &str) {
        self.send_html(format::order_cancelled(order_id)).await;
    }

    pub async fn send_active_orders(&self, orders: &[Order]) {
        self.send_html(format::active_orders(orders)).await;
    }

    pub async fn send_error(&self, message: &str) {
        self.send_html(format::error(message)).await;
    }

    pub async fn send_alert(&self, message: &str) {
        self.send_html(format::alert(message)).await;
    }

    pub async fn send_info(&self, message: &str) {
        self.send_html(format::info(message)).await;
    }
}
